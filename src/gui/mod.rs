// src/gui/mod.rs
pub mod app;
pub mod data_table;
pub mod progress;

pub use app::run;
