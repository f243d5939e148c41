// ABOUTME: Main library module for the stencil template renderer
// ABOUTME: Exports the pipeline stages and provides the public API

pub mod cli;
pub mod output;
pub mod template;
pub mod vars;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use output::{FileWriter, OutputWriter, StdoutWriter};
pub use template::{CompiledTemplate, TemplateEngine};
pub use vars::{DocumentSource, VariableResolver};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
