//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stratum_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StratumError, StratumResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    fn write_with(&self, path: &Path, content: &str, options: &OpenOptions) -> io::Result<()> {
        let file = options.open(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        self.write_with(path, content, &options)
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> StratumResult<()> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        self.write_with(path, content, &options)
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_file(&self, path: &Path) -> StratumResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StratumError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
