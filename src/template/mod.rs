// ABOUTME: Template module for the stencil renderer
// ABOUTME: Provides template loading, compilation, and rendering

pub mod engine;
pub mod error;

pub use engine::{CompiledTemplate, TemplateEngine};
pub use error::{Result, TemplateError};
