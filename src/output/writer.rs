// ABOUTME: Output writers for render destinations (stdout, files)
// ABOUTME: Handles selecting and writing to the destination byte stream

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{OutputError, Result};

pub trait OutputWriter {
    fn write(&mut self, content: &str) -> Result<()>;
}

/// The process's standard output. Not owned by this program and never
/// closed by it.
pub struct StdoutWriter;

/// A newly created (or truncated) file, owned for the duration of the
/// write and closed on drop.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: File,
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&mut self, content: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| OutputError::Write {
                destination: "stdout".to_string(),
                source,
            })?;

        debug!("Output written to stdout ({} bytes)", content.len());
        Ok(())
    }
}

impl FileWriter {
    /// Create-or-truncate the output file at the given path
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl OutputWriter for FileWriter {
    fn write(&mut self, content: &str) -> Result<()> {
        self.file
            .write_all(content.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|source| OutputError::Write {
                destination: self.path.display().to_string(),
                source,
            })?;

        debug!(
            "Output written to file: {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}

/// Select the destination for rendered output. No path selects standard
/// output; a path selects a newly created file at that location.
pub fn select_writer(path: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    match path {
        None => Ok(Box::new(StdoutWriter::new())),
        Some(path) => Ok(Box::new(FileWriter::create(path)?)),
    }
}
