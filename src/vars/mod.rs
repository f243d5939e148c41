// ABOUTME: Variable source handling for the stencil renderer
// ABOUTME: Exports the resolver and the JSON/YAML document sources

pub mod error;
pub mod resolver;
pub mod source;

pub use error::{Result, VarsError};
pub use resolver::VariableResolver;
pub use source::{DocumentSource, SourceFormat};
