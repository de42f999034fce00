//! Computed data from IR analysis.
//!
//! [`ComputedData`] holds the classification of every descriptor together
//! with its [`ArtifactPlan`], so the backend and the CLI reports read the
//! same decisions.

use serde::Serialize;
use stid_ir::{Category, GenerationIR, TypeDescriptor};
use stid_manifest::Manifest;

use super::ArtifactPlan;

/// A descriptor after classification.
#[derive(Debug, Clone, Serialize)]
pub struct ComputedType {
    pub descriptor: TypeDescriptor,
    /// `Namespace.Name`, or just `Name` in the global namespace.
    pub qualified_name: String,
    pub category: Category,
    pub plan: ArtifactPlan,
}

impl ComputedType {
    pub fn new(descriptor: &TypeDescriptor) -> Self {
        let category = Category::classify(&descriptor.underlying_type);
        Self {
            qualified_name: descriptor.qualified_name(),
            plan: ArtifactPlan::new(category, &descriptor.flags),
            category,
            descriptor: descriptor.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Pre-computed data from IR analysis.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ComputedData {
    /// Classified descriptors, in declaration order.
    pub types: Vec<ComputedType>,
    /// Declared types that produced no descriptor (no resolvable `Value`).
    pub skipped: Vec<String>,
    /// Only the marker attribute is emitted.
    pub bootstrap_only: bool,
}

impl ComputedData {
    /// Compute all data from the generation IR.
    ///
    /// A bootstrap run classifies nothing.
    pub fn from_ir(ir: &GenerationIR, manifest: &Manifest) -> Self {
        if !ir.host.marker_visible {
            return Self {
                bootstrap_only: true,
                ..Default::default()
            };
        }

        let types: Vec<ComputedType> = ir.descriptors.iter().map(ComputedType::new).collect();

        let skipped = manifest
            .types
            .keys()
            .filter(|name| !types.iter().any(|t| t.name() == name.as_str()))
            .cloned()
            .collect();

        Self {
            types,
            skipped,
            bootstrap_only: false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComputedType> {
        self.types.iter().find(|t| t.name() == name)
    }

    pub fn fallback_count(&self) -> usize {
        self.types.iter().filter(|t| t.category.is_fallback()).count()
    }

    /// Number of files a run produces.
    pub fn file_count(&self) -> usize {
        if self.bootstrap_only {
            1
        } else {
            2 * self.types.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use stid_ir::HostInfo;

    use super::*;

    fn ir(descriptors: Vec<TypeDescriptor>) -> GenerationIR {
        GenerationIR {
            host: HostInfo::default(),
            descriptors,
        }
    }

    #[test]
    fn test_classification_and_plan() {
        let ir = ir(vec![
            TypeDescriptor::new("OrderId", "System.Guid").with_namespace("Shop"),
            TypeDescriptor::new("Tag", "Shop.Label"),
        ]);
        let computed = ComputedData::from_ir(&ir, &Manifest::default());

        let order = computed.get("OrderId").unwrap();
        assert_eq!(order.category, Category::Guid);
        assert_eq!(order.qualified_name, "Shop.OrderId");
        assert!(order.plan.is_comparable());

        let tag = computed.get("Tag").unwrap();
        assert!(tag.category.is_fallback());
        assert!(tag.plan.needs_conversion_helper());

        assert_eq!(computed.fallback_count(), 1);
        assert_eq!(computed.file_count(), 4);
    }

    #[test]
    fn test_bootstrap_only() {
        let mut ir = ir(vec![TypeDescriptor::new("OrderId", "int")]);
        ir.host.marker_visible = false;

        let computed = ComputedData::from_ir(&ir, &Manifest::default());
        assert!(computed.bootstrap_only);
        assert!(computed.types.is_empty());
        assert!(computed.skipped.is_empty());
        assert_eq!(computed.file_count(), 1);
    }
}
