//! XML documentation comments.

use stid_codegen::builder::{CodeFragment, Renderable};

/// An XML doc comment block.
#[derive(Debug, Clone, Default)]
pub struct Doc {
    summary: Option<String>,
    params: Vec<(String, String)>,
    returns: Option<String>,
    inherit: bool,
}

impl Doc {
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            summary: Some(text.into()),
            ..Default::default()
        }
    }

    /// `/// <inheritdoc />`
    pub fn inherit() -> Self {
        Self {
            inherit: true,
            ..Default::default()
        }
    }

    pub fn param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }
}

impl Renderable for Doc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if self.inherit {
            fragments.push(CodeFragment::doc("<inheritdoc />"));
        }
        if let Some(summary) = &self.summary {
            fragments.push(CodeFragment::summary(summary.as_str()));
        }
        for (name, text) in &self.params {
            fragments.push(CodeFragment::doc(format!(
                "<param name=\"{name}\">{text}</param>"
            )));
        }
        if let Some(returns) = &self.returns {
            fragments.push(CodeFragment::doc(format!("<returns>{returns}</returns>")));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use stid_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_full_doc() {
        let doc = Doc::summary("Creates a new OrderId from a string value")
            .param("value", "The string value to parse")
            .returns("A new OrderId instance");

        let code = CodeBuilder::csharp().node(&doc).build();
        insta::assert_snapshot!(code, @r#"
        /// <summary>
        /// Creates a new OrderId from a string value
        /// </summary>
        /// <param name="value">The string value to parse</param>
        /// <returns>A new OrderId instance</returns>
        "#);
    }

    #[test]
    fn test_inheritdoc() {
        let code = CodeBuilder::csharp().node(&Doc::inherit()).build();
        assert_eq!(code, "/// <inheritdoc />\n");
    }
}
