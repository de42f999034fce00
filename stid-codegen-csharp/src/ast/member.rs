//! Type members: methods, operators and properties.

use stid_codegen::builder::{CodeFragment, Renderable};

use super::Doc;

/// How a member's body is written.
#[derive(Debug, Clone)]
pub enum Body {
    /// The signature line is the whole member (auto-properties, fields).
    None,
    /// `signature => expr;` on a single line.
    Arrow(String),
    /// `signature` followed by indented `=> ...` continuation lines.
    ArrowBelow(Vec<String>),
    /// A braced statement block.
    Block(Vec<CodeFragment>),
}

/// A documented member declaration.
#[derive(Debug, Clone)]
pub struct Member {
    doc: Option<Doc>,
    signature: String,
    body: Body,
}

impl Member {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            doc: None,
            signature: signature.into(),
            body: Body::None,
        }
    }

    pub fn doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn arrow(mut self, expr: impl Into<String>) -> Self {
        self.body = Body::Arrow(expr.into());
        self
    }

    pub fn arrow_below(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = Body::ArrowBelow(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn block(mut self, body: Vec<CodeFragment>) -> Self {
        self.body = Body::Block(body);
        self
    }

    /// Convenience for a block made of plain lines.
    pub fn lines(self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.block(lines.into_iter().map(CodeFragment::line).collect())
    }
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self
            .doc
            .as_ref()
            .map(Renderable::to_fragments)
            .unwrap_or_default();

        match &self.body {
            Body::None => fragments.push(CodeFragment::line(self.signature.as_str())),
            Body::Arrow(expr) => {
                fragments.push(CodeFragment::line(format!("{} => {expr};", self.signature)))
            }
            Body::ArrowBelow(lines) => {
                fragments.push(CodeFragment::line(self.signature.as_str()));
                fragments.push(CodeFragment::indent(
                    lines.iter().map(CodeFragment::line).collect(),
                ));
            }
            Body::Block(body) => {
                fragments.push(CodeFragment::braced(self.signature.as_str(), body.clone()))
            }
        }

        fragments
    }
}
