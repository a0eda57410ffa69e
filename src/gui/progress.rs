// src/gui/progress.rs
use crate::progress::Progress;

/// Writes build progress into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, maker_id: u32) {
        self.done += 1;
        *self.status = format!("Built maker {} ({}/{})", maker_id, self.done, self.total);
    }
    fn finish(&mut self) {
        *self.status = format!("Build complete ({}/{} makers)", self.done, self.total);
    }
}
