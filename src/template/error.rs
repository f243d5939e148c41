// ABOUTME: Error types for template operations
// ABOUTME: Defines specific error types for template loading, compilation, and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Error reading the input file {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Template render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
