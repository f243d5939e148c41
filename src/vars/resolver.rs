// ABOUTME: Variable resolution and merging across inline, JSON, and YAML sources
// ABOUTME: Applies the fixed inline < JSON < YAML precedence when keys collide

use std::collections::HashMap;
use tracing::debug;

use super::error::{Result, VarsError};
use super::source::DocumentSource;

/// Builds the flat variable mapping for a render from up to three sources.
///
/// Sources are layered in a fixed order: inline assignments first, then the
/// JSON document, then the YAML document. A later source overwrites earlier
/// values for colliding keys, so the effective precedence is
/// inline < JSON < YAML. This ordering is an observable contract.
pub struct VariableResolver {
    inline: Vec<String>,
    json: Option<DocumentSource>,
    yaml: Option<DocumentSource>,
}

impl VariableResolver {
    pub fn new() -> Self {
        Self {
            inline: Vec::new(),
            json: None,
            yaml: None,
        }
    }

    /// Add inline `key=value` assignments, applied in the order given
    pub fn with_inline(mut self, assignments: &[String]) -> Self {
        self.inline.extend(assignments.iter().cloned());
        self
    }

    /// Set the JSON source (a file path or a literal document)
    pub fn with_json(mut self, input: Option<&str>) -> Self {
        self.json = input.map(DocumentSource::json);
        self
    }

    /// Set the YAML source (a file path or a literal document)
    pub fn with_yaml(mut self, input: Option<&str>) -> Self {
        self.yaml = input.map(DocumentSource::yaml);
        self
    }

    /// Produce the merged variable mapping
    pub fn resolve(&self) -> Result<HashMap<String, String>> {
        let mut variables = HashMap::new();

        for assignment in &self.inline {
            let (key, value) = parse_assignment(assignment)?;
            variables.insert(key, value);
        }

        if let Some(source) = &self.json {
            variables.extend(source.load()?);
        }

        if let Some(source) = &self.yaml {
            variables.extend(source.load()?);
        }

        debug!("Resolved {} template variables", variables.len());
        Ok(variables)
    }
}

impl Default for VariableResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single `key=value` assignment. Only the first `=` delimits, so
/// the value may itself contain `=` characters.
pub fn parse_assignment(token: &str) -> Result<(String, String)> {
    match token.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(VarsError::InvalidAssignment(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let (key, value) = parse_assignment("env=production").unwrap();
        assert_eq!(key, "env");
        assert_eq!(value, "production");
    }

    #[test]
    fn test_parse_assignment_value_may_contain_equals() {
        let (key, value) = parse_assignment("query=a=b=c").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "a=b=c");
    }

    #[test]
    fn test_parse_assignment_empty_value() {
        let (key, value) = parse_assignment("flag=").unwrap();
        assert_eq!(key, "flag");
        assert_eq!(value, "");
    }

    #[test]
    fn test_parse_assignment_invalid() {
        let err = parse_assignment("no_delimiter").unwrap_err();
        assert!(err.to_string().contains("no_delimiter"));
    }

    #[test]
    fn test_inline_later_duplicate_wins() {
        let variables = VariableResolver::new()
            .with_inline(&["name=first".to_string(), "name=second".to_string()])
            .resolve()
            .unwrap();

        assert_eq!(variables.get("name"), Some(&"second".to_string()));
        assert_eq!(variables.len(), 1);
    }

    #[test]
    fn test_json_overrides_inline() {
        let variables = VariableResolver::new()
            .with_inline(&["name=inline".to_string(), "only_inline=yes".to_string()])
            .with_json(Some(r#"{"name": "json"}"#))
            .resolve()
            .unwrap();

        assert_eq!(variables.get("name"), Some(&"json".to_string()));
        assert_eq!(variables.get("only_inline"), Some(&"yes".to_string()));
    }

    #[test]
    fn test_yaml_overrides_json_and_inline() {
        let variables = VariableResolver::new()
            .with_inline(&["name=inline".to_string()])
            .with_json(Some(r#"{"name": "json", "region": "json-region"}"#))
            .with_yaml(Some("name: yaml"))
            .resolve()
            .unwrap();

        assert_eq!(variables.get("name"), Some(&"yaml".to_string()));
        assert_eq!(variables.get("region"), Some(&"json-region".to_string()));
    }

    #[test]
    fn test_empty_resolver_yields_empty_mapping() {
        let variables = VariableResolver::new().resolve().unwrap();
        assert!(variables.is_empty());
    }

    #[test]
    fn test_malformed_inline_is_fatal() {
        let result = VariableResolver::new()
            .with_inline(&["broken".to_string()])
            .resolve();

        assert!(matches!(result, Err(VarsError::InvalidAssignment(_))));
    }
}
