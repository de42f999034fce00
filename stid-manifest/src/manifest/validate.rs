//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use stid_core::{GLOBAL_NAMESPACE, is_csharp_keyword, validate_identifier};

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "stid.toml");
/// ctx.push("types").validate_name("OrderId", "type")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments, e.g. ["types", "OrderId"]
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages, e.g. "namespace in 'types.OrderId'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted namespace, segment by segment.
    ///
    /// The host's global-namespace sentinel is accepted as-is.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        if namespace.is_empty() || namespace == GLOBAL_NAMESPACE {
            return Ok(());
        }

        for segment in namespace.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    namespace,
                    self.context_for("namespace"),
                    reason,
                    self.find_span(namespace),
                ));
            }
        }

        Ok(())
    }

    /// Validate a `value = "..."` type name.
    ///
    /// Any non-blank name is accepted. Names that are not a recognized
    /// primitive classify as fallback later on.
    pub fn validate_value_type(&self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("{} cannot be empty", self.context_for("value type")),
                find_assignment_span(self.source.src(), "value", value),
            ));
        }
        Ok(())
    }
}

/// Find the span of a declaration name in the TOML source.
///
/// Looks for table headers like `[types.Name]` / `[types.Name.flags]` and
/// for quoted values like `base = "Name"`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find the span of the quoted value in `key = "value"`.
pub(crate) fn find_assignment_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{key} = {quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            let start = pos + key.len() + 4;
            return Some(SourceSpan::from((start, value.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[types.OrderId]\nvalue = \"int\"\n";
        let span = find_name_span(src, "OrderId").unwrap();
        assert_eq!(span.offset(), 7);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_find_name_span_quoted_reference() {
        let src = "[types.TenantId]\nbase = \"Identifier\"\n";
        let span = find_name_span(src, "Identifier").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Identifier");
    }

    #[test]
    fn test_find_assignment_span() {
        let src = "[types.A]\nvalue = \"1nt\"\n";
        let span = find_assignment_span(src, "value", "1nt").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "1nt");
    }

    #[test]
    fn test_context_for_nested_path() {
        let ctx = ParseContext::new("", "stid.toml");
        assert_eq!(ctx.context_for("type"), "type");
        assert_eq!(
            ctx.push("types").push("OrderId").context_for("namespace"),
            "namespace in 'types.OrderId'"
        );
    }

    #[test]
    fn test_validate_namespace() {
        let ctx = ParseContext::new("", "stid.toml");
        assert!(ctx.validate_namespace("Demo.Orders").is_ok());
        assert!(ctx.validate_namespace("<global namespace>").is_ok());
        assert!(ctx.validate_namespace("Demo..Orders").is_err());
        assert!(ctx.validate_namespace("Demo.1Orders").is_err());
    }

    #[test]
    fn test_validate_value_type() {
        let ctx = ParseContext::new("", "stid.toml");
        assert!(ctx.validate_value_type("System.Guid").is_ok());
        assert!(ctx.validate_value_type("int").is_ok());
        assert!(ctx.validate_value_type("Demo.Money").is_ok());
        assert!(ctx.validate_value_type("").is_err());
        assert!(ctx.validate_value_type("   ").is_err());
    }

    #[test]
    fn test_unrecognized_value_types_are_accepted() {
        let ctx = ParseContext::new("", "stid.toml").push("types").push("SomeId");
        for value in ["System.Guid?", "List<int>", "byte[]", "(int, int)"] {
            assert!(ctx.validate_value_type(value).is_ok(), "{value}");
        }
    }
}
