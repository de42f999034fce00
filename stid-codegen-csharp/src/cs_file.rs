//! CsFile abstraction for generated C# source files.

use stid_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use stid_ir::GLOBAL_NAMESPACE;

/// First lines of every generated file.
pub const FILE_HEADER: [&str; 2] = ["// <auto-generated />", "#nullable enable"];

/// A structured C# file: header, using directives, an optional file-scoped
/// namespace and the declarations.
///
/// # Example
///
/// ```ignore
/// let code = CsFile::new()
///     .using("System")
///     .namespace(Some("Shop"))
///     .add(type_decl)
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CsFile {
    usings: Vec<String>,
    namespace: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        self.usings.push(namespace.into());
        self
    }

    /// Add a using directive when `condition` holds.
    pub fn using_if(self, condition: bool, namespace: impl Into<String>) -> Self {
        if condition { self.using(namespace) } else { self }
    }

    /// Set the file-scoped namespace.
    ///
    /// Empty names and the global namespace sentinel produce no declaration.
    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace
            .filter(|ns| !ns.is_empty() && *ns != GLOBAL_NAMESPACE)
            .map(str::to_string);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::csharp();

        for line in FILE_HEADER {
            builder.push_line(line);
        }
        builder.push_blank();

        for using in &self.usings {
            builder.push_line(&format!("using {using};"));
        }
        builder.push_blank();

        if let Some(namespace) = &self.namespace {
            builder.push_line(&format!("namespace {namespace};"));
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        assert_eq!(
            CsFile::new().render(),
            "// <auto-generated />\n#nullable enable\n\n"
        );
    }

    #[test]
    fn test_usings_namespace_and_body() {
        let code = CsFile::new()
            .using("System")
            .using_if(false, "System.Linq")
            .namespace(Some("Shop.Orders"))
            .add(CodeFragment::line("public partial record OrderId;"))
            .add(CodeFragment::line("public partial record LineId;"))
            .render();

        insta::assert_snapshot!(code, @r"
        // <auto-generated />
        #nullable enable

        using System;

        namespace Shop.Orders;

        public partial record OrderId;

        public partial record LineId;
        ");
    }

    #[test]
    fn test_global_namespace_is_omitted() {
        for namespace in [None, Some(""), Some(GLOBAL_NAMESPACE)] {
            let code = CsFile::new()
                .namespace(namespace)
                .add(CodeFragment::line("class A {}"))
                .render();
            assert!(!code.contains("namespace"));
            assert!(code.ends_with("#nullable enable\n\nclass A {}\n"));
        }
    }
}
