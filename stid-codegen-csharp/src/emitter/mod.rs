//! Emission of the two artifacts generated per identifier type.
//!
//! Section selection comes from [`ArtifactPlan`]; this module only turns the
//! planned sections into C# text.

mod partial;
mod support;

use stid_codegen::{language::TypeMapper, schema::ArtifactPlan};
use stid_ir::{Category, FeatureFlags, TypeDescriptor};

pub use partial::emit_partial;
pub use support::emit_support;

use crate::CSharpTypeMapper;

/// Everything a section needs to know about the type being emitted.
struct Subject<'a> {
    /// Identifier type name, e.g. `OrderId`.
    name: &'a str,
    namespace: Option<&'a str>,
    /// Source-level underlying type, e.g. `Guid` or `Money`.
    ty: String,
    category: Category,
    plan: ArtifactPlan,
}

impl<'a> Subject<'a> {
    fn new(descriptor: &'a TypeDescriptor, category: Category, flags: &FeatureFlags) -> Self {
        Self {
            name: &descriptor.name,
            namespace: descriptor.declared_namespace(),
            ty: CSharpTypeMapper.map_underlying(category, &descriptor.underlying_type),
            category,
            plan: ArtifactPlan::new(category, flags),
        }
    }
}
