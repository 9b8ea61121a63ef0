// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub grid: GridOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            grid: GridOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Card grid dimensions; the paginator's page size is derived from these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOptions {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { rows: GRID_ROWS, cols: GRID_COLS }
    }
}

impl GridOptions {
    #[inline]
    pub fn page_size(&self) -> usize {
        (self.rows * self.cols).max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: OutputPath::default() }
    }
}

impl ExportOptions {
    /// Export is always a single JSON document.
    pub fn ext(&self) -> &'static str { "json" }

    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", self.ext()));
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
