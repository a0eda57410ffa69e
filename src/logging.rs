// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Appends `[elapsed][LEVEL] message` lines to one file.
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    start: Instant,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), level, start: Instant::now(), lock: Mutex::new(()) }
    }

    fn line(&self, record: &Record) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }
        let line = self.line(record);

        if let Ok(_guard) = self.lock.lock() {
            if let Some(parent) = self.path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger for the process. Only the first call wins;
/// later calls return the `log` crate's error.
pub fn init(path: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| FileLogger::new(path, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}
