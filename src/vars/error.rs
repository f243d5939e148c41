// ABOUTME: Error types for variable resolution
// ABOUTME: Defines specific error types for inline assignments and document sources

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarsError {
    #[error("Invalid variable format '{0}'. Expected 'key=value'")]
    InvalidAssignment(String),

    #[error("Could not read the variables file at {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Error parsing JSON variables from {origin}: {source}")]
    JsonParse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("Error parsing YAML variables from {origin}: {source}")]
    YamlParse {
        origin: String,
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, VarsError>;
