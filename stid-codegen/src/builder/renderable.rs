//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; only the [`CodeBuilder`]
//! knows about indentation and line endings.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// One line of an XML doc comment (`/// text`).
    Doc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// A block whose body is indented, with an optional closing line.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A C-style brace block:
    ///
    /// ```text
    /// header
    /// {
    ///     body
    /// }
    /// ```
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::block("{", body, Some("}".to_string())),
        ])
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// A `<summary>` doc block.
    pub fn summary(text: impl Into<String>) -> Self {
        Self::Sequence(vec![
            Self::doc("<summary>"),
            Self::doc(text),
            Self::doc("</summary>"),
        ])
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(CodeFragment::doc("text"), CodeFragment::Doc("text".to_string()));
    }

    #[test]
    fn test_braced_puts_brace_on_its_own_line() {
        let braced = CodeFragment::braced("public void Run()", vec![CodeFragment::line("Go();")]);
        match braced {
            CodeFragment::Sequence(parts) => {
                assert_eq!(parts[0], CodeFragment::line("public void Run()"));
                assert!(matches!(&parts[1], CodeFragment::Block { header, .. } if header == "{"));
            }
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_wraps_text() {
        assert_eq!(
            CodeFragment::summary("Creates a value."),
            CodeFragment::Sequence(vec![
                CodeFragment::doc("<summary>"),
                CodeFragment::doc("Creates a value."),
                CodeFragment::doc("</summary>"),
            ])
        );
    }
}
