//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` (returning `&mut Self`).
///
/// # Example
///
/// ```
/// use stid_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .braced("public static class Greeter", |b| {
///         b.line("public static string Hello() => \"hi\";")
///     })
///     .build();
///
/// assert_eq!(
///     code,
///     "public static class Greeter\n{\n    public static string Hello() => \"hi\";\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Consecutive blank lines collapse into one.
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an XML doc comment line (`/// text`).
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a `header` line followed by a `{ ... }` block on separate lines.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Add an XML doc comment line (`/// text`).
    pub fn doc(mut self, text: &str) -> Self {
        self.push_doc(text);
        self
    }

    /// Add a `<summary>` doc block.
    pub fn summary(self, text: &str) -> Self {
        self.doc("<summary>").doc(text).doc("</summary>")
    }

    /// Emit a Renderable node.
    pub fn node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::csharp().line("var x = 1;").build();
        assert_eq!(code, "var x = 1;\n");
    }

    #[test]
    fn test_braced_block() {
        let code = CodeBuilder::csharp()
            .braced("public void Run()", |b| b.line("Go();"))
            .build();
        assert_eq!(code, "public void Run()\n{\n    Go();\n}\n");
    }

    #[test]
    fn test_blank_lines_collapse() {
        let code = CodeBuilder::csharp()
            .blank()
            .line("using System;")
            .blank()
            .blank()
            .line("namespace Demo;")
            .build();
        assert_eq!(code, "using System;\n\nnamespace Demo;\n");
    }

    #[test]
    fn test_summary_doc() {
        let code = CodeBuilder::csharp()
            .indent()
            .summary("Creates a new value.")
            .build();
        assert_eq!(
            code,
            "    /// <summary>\n    /// Creates a new value.\n    /// </summary>\n"
        );
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Method;
        impl Renderable for Method {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::summary("Does it."),
                    CodeFragment::braced("public void Do()", vec![CodeFragment::line("return;")]),
                ]
            }
        }

        let mut builder = CodeBuilder::csharp();
        builder.push_indent().emit(&Method);
        assert_eq!(
            builder.build(),
            "    /// <summary>\n    /// Does it.\n    /// </summary>\n    public void Do()\n    {\n        return;\n    }\n"
        );
    }
}
