//! Type declarations (records and classes).

use stid_codegen::builder::{CodeFragment, Renderable};

use super::{Doc, Member};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    PartialRecord,
    SealedClass,
    StaticClass,
    InternalStaticClass,
    Class,
}

impl TypeKind {
    fn keywords(&self) -> &'static str {
        match self {
            TypeKind::PartialRecord => "public partial record",
            TypeKind::SealedClass => "public sealed class",
            TypeKind::StaticClass => "public static class",
            TypeKind::InternalStaticClass => "internal static class",
            TypeKind::Class => "public class",
        }
    }
}

/// A type declaration with attributes, documentation and members.
///
/// Members are separated by one blank line.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    kind: TypeKind,
    name: String,
    attributes: Vec<String>,
    doc: Option<Doc>,
    bases: Vec<String>,
    members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attributes: Vec::new(),
            doc: None,
            bases: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add an attribute, written without brackets (`DebuggerDisplay("{Value}")`).
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    fn header(&self) -> String {
        let header = format!("{} {}", self.kind.keywords(), self.name);
        if self.bases.is_empty() {
            header
        } else {
            format!("{header} : {}", self.bases.join(", "))
        }
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .attributes
            .iter()
            .map(|attr| CodeFragment::line(format!("[{attr}]")))
            .collect();

        if let Some(doc) = &self.doc {
            fragments.extend(doc.to_fragments());
        }

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(member.to_fragments());
        }

        fragments.push(CodeFragment::braced(self.header(), body));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use stid_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_record_with_attributes_and_members() {
        let decl = TypeDecl::new(TypeKind::PartialRecord, "OrderId")
            .attribute("DebuggerDisplay(\"{Value}\")")
            .doc(Doc::summary("Order identifier"))
            .base("IComparable<OrderId>")
            .member(Member::new("public override string ToString()").arrow("Value.ToString()"))
            .member(Member::new("public static OrderId Empty { get; } = new(Guid.Empty);"));

        let code = CodeBuilder::csharp().node(&decl).build();
        insta::assert_snapshot!(code, @r#"
        [DebuggerDisplay("{Value}")]
        /// <summary>
        /// Order identifier
        /// </summary>
        public partial record OrderId : IComparable<OrderId>
        {
            public override string ToString() => Value.ToString();

            public static OrderId Empty { get; } = new(Guid.Empty);
        }
        "#);
    }

    #[test]
    fn test_empty_class() {
        let decl = TypeDecl::new(TypeKind::StaticClass, "OrderIdExtensions");
        let code = CodeBuilder::csharp().node(&decl).build();
        assert_eq!(code, "public static class OrderIdExtensions\n{\n}\n");
    }
}
