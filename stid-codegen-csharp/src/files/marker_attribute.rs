use stid_core::GeneratedFile;
use stid_ir::Flag;

use crate::{
    CsFile,
    ast::{Doc, Member, TypeDecl, TypeKind},
};

/// Name of the marker attribute class.
pub const MARKER_ATTRIBUTE: &str = "GenerateStronglyTypedIdSupportAttribute";

/// `GenerateStronglyTypedIdSupportAttribute.g.cs`, the marker definition
/// emitted when the host does not provide it yet.
pub struct MarkerAttribute<'a> {
    namespace: &'a str,
}

impl<'a> MarkerAttribute<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }
}

fn flag_summary(flag: Flag) -> &'static str {
    match flag {
        Flag::JsonConverter => "Gets or sets whether to generate a JSON converter",
        Flag::TypeConverter => "Gets or sets whether to generate a type converter",
        Flag::ParseMethod => "Gets or sets whether to generate a Parse method",
        Flag::TryParseMethod => "Gets or sets whether to generate a TryParse method",
        Flag::Comparisons => "Gets or sets whether to generate comparison operators",
        Flag::NewMethod => {
            "Gets or sets whether to generate a New method for creating new instances"
        }
        Flag::Extensions => "Gets or sets whether to generate extension methods",
    }
}

impl GeneratedFile for MarkerAttribute<'_> {
    fn file_name(&self) -> String {
        format!("{MARKER_ATTRIBUTE}.g.cs")
    }

    fn render(&self) -> String {
        let decl = TypeDecl::new(TypeKind::Class, MARKER_ATTRIBUTE)
            .attribute("AttributeUsage(AttributeTargets.Class | AttributeTargets.Struct)")
            .doc(Doc::summary(
                "Generates strongly typed ID support code including converters, extensions, and utility methods",
            ))
            .base("Attribute")
            .members(Flag::ALL.into_iter().map(|flag| {
                Member::new(format!("public bool {} {{ get; set; }} = true;", flag.key()))
                    .doc(Doc::summary(flag_summary(flag)))
            }));

        CsFile::new()
            .using("System")
            .namespace(Some(self.namespace))
            .add(decl)
            .render()
    }
}
