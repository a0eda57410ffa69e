// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    /// Raw catalog JSON (`maker -> device -> fields`)
    pub input: Option<PathBuf>,
    pub export: ExportOptions,
    /// Print makers with their dense ids and stop
    pub list_makers: bool,
    /// Print table shape and parser activity after the build
    pub summary: bool,
    /// Debug log destination; `LOG_FILE` when unset
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    /// Array of row objects; missing features are left out
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv  => "csv",
            ExportFormat::Tsv  => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv  => Some(','),
            ExportFormat::Tsv  => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv"  => Some(ExportFormat::Csv),
            "tsv"  => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Text written for a feature the device never had
    pub missing: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            missing: s!(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own extension if they gave one.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.user_ext {
            Some(ext) => name.push(ext),
            None      => name.push(self.format.ext()),
        }
        path.push(name);
        path
    }

    /// Split user text into dir + stem (+ extension, kept verbatim).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
