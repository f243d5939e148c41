// ABOUTME: Template compilation and rendering built on Handlebars
// ABOUTME: Configures the engine for plain-text, non-strict output

use handlebars::Handlebars;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::{Result, TemplateError};

const MAIN_TEMPLATE: &str = "main";

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Configure handlebars. A reference to a name absent from the
        // variable mapping renders as an empty value (non-strict mode).
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Disable HTML escaping since we're rendering arbitrary text, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Compile a template from a source file
    pub fn compile_file(&self, path: &Path) -> Result<CompiledTemplate> {
        let source = fs::read_to_string(path).map_err(|source| TemplateError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Read template file: {}", path.display());

        self.compile(&source)
    }

    /// Compile a template from source text
    pub fn compile(&self, source: &str) -> Result<CompiledTemplate> {
        let mut registry = self.handlebars.clone();
        registry
            .register_template_string(MAIN_TEMPLATE, source)
            .map_err(|e| TemplateError::Syntax(e.to_string()))?;

        Ok(CompiledTemplate { registry })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled template, ready to be rendered against a variable mapping.
#[derive(Debug)]
pub struct CompiledTemplate {
    registry: Handlebars<'static>,
}

impl CompiledTemplate {
    /// Render the template against a flat variable mapping
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String> {
        self.registry
            .render(MAIN_TEMPLATE, variables)
            .map_err(TemplateError::Render)
    }
}
