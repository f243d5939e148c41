// ABOUTME: Path-or-literal document sources for JSON and YAML variables
// ABOUTME: Decodes documents into flat string-to-string mappings

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::{Result, VarsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "JSON"),
            SourceFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// A JSON or YAML variables document, given either as a file path or as the
/// document text itself.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    format: SourceFormat,
    input: String,
}

impl DocumentSource {
    pub fn json(input: impl Into<String>) -> Self {
        Self {
            format: SourceFormat::Json,
            input: input.into(),
        }
    }

    pub fn yaml(input: impl Into<String>) -> Self {
        Self {
            format: SourceFormat::Yaml,
            input: input.into(),
        }
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Load and decode the source into a flat variable mapping.
    ///
    /// An input naming an existing file is read from disk and then decoded;
    /// anything else is decoded as a literal document. Values must be
    /// strings, any other document shape is an error.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let path = Path::new(&self.input);

        if path.is_file() {
            let content = fs::read_to_string(path).map_err(|source| VarsError::FileRead {
                path: self.input.clone(),
                source,
            })?;
            debug!("Read {} variables file: {}", self.format, self.input);
            self.decode(&content, &self.input)
        } else {
            self.decode(&self.input, &describe_literal(&self.input))
        }
    }

    fn decode(&self, document: &str, origin: &str) -> Result<HashMap<String, String>> {
        match self.format {
            SourceFormat::Json => {
                serde_json::from_str(document).map_err(|source| VarsError::JsonParse {
                    origin: origin.to_string(),
                    source,
                })
            }
            SourceFormat::Yaml => {
                serde_yaml::from_str(document).map_err(|source| VarsError::YamlParse {
                    origin: origin.to_string(),
                    source,
                })
            }
        }
    }
}

fn describe_literal(input: &str) -> String {
    const MAX_CHARS: usize = 40;

    if input.chars().count() > MAX_CHARS {
        let snippet: String = input.chars().take(MAX_CHARS).collect();
        format!("literal \"{}...\"", snippet)
    } else {
        format!("literal \"{}\"", input)
    }
}
