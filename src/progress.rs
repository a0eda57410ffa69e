// src/progress.rs
/// Lightweight progress reporting for the catalog build.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of makers.
    fn begin(&mut self, _total: usize) {}

    /// Called when every device of one maker has been built.
    fn item_done(&mut self, _maker_id: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
