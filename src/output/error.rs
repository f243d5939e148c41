// ABOUTME: Error types for output handling
// ABOUTME: Defines specific error types for sink creation and writing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error creating output file {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("Error writing output to {destination}: {source}")]
    Write {
        destination: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
