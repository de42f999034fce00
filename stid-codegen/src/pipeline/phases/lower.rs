//! Lower phase - turns marked declarations into type descriptors.

use eyre::Result;
use stid_ir::{FeatureFlags, GenerationIR, HostInfo, TypeDescriptor};
use stid_manifest::{Manifest, TypeDecl};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that lowers the manifest into the generation IR.
///
/// A declaration whose `Value` member cannot be located produces no
/// descriptor. `MissingValueLint` reports those. A bootstrap run lowers the
/// host only.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve Value members and flags into type descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_manifest(&ctx.manifest));
        Ok(())
    }
}

fn lower_manifest(manifest: &Manifest) -> GenerationIR {
    let descriptors = if manifest.host.marker_visible {
        manifest
            .types
            .iter()
            .filter_map(|(name, decl)| lower_type(manifest, name, decl))
            .collect()
    } else {
        Vec::new()
    };

    GenerationIR {
        host: HostInfo {
            marker_visible: manifest.host.marker_visible,
            marker_namespace: manifest.host.marker_namespace.clone(),
        },
        descriptors,
    }
}

fn lower_type(manifest: &Manifest, name: &str, decl: &TypeDecl) -> Option<TypeDescriptor> {
    let lookup = manifest.resolve_value(name);
    let underlying = lookup.value()?;

    Some(TypeDescriptor {
        name: name.to_string(),
        namespace: decl.namespace.clone(),
        underlying_type: underlying.to_string(),
        flags: FeatureFlags::resolve(decl.boolean_flags()),
    })
}

#[cfg(test)]
mod tests {
    use stid_ir::Flag;

    use super::*;

    fn lower(src: &str) -> GenerationIR {
        let mut ctx = CompilationContext::new(src.parse().unwrap());
        LowerPhase.run(&mut ctx).unwrap();
        ctx.take_ir().unwrap()
    }

    #[test]
    fn test_lower_own_and_inherited_values() {
        let ir = lower(
            r#"
            [bases.Identifier]
            value = "long"

            [types.OrderId]
            namespace = "Demo"
            value = "System.Guid"

            [types.TenantId]
            base = "Identifier"
            "#,
        );

        assert_eq!(ir.descriptors.len(), 2);
        assert_eq!(ir.descriptors[0].name, "OrderId");
        assert_eq!(ir.descriptors[0].namespace.as_deref(), Some("Demo"));
        assert_eq!(ir.descriptors[0].underlying_type, "System.Guid");
        assert_eq!(ir.descriptors[1].underlying_type, "long");
        assert_eq!(ir.descriptors[1].namespace, None);
    }

    #[test]
    fn test_lower_resolves_flags() {
        let ir = lower(
            r#"
            [types.OrderId]
            value = "System.Guid"

            [types.OrderId.flags]
            GenerateComparisons = false
            GenerateNewMethod = "nope"
            GenerateSparkles = false
            "#,
        );

        assert_eq!(ir.descriptors[0].flags.disabled(), vec![Flag::Comparisons]);
    }

    #[test]
    fn test_lower_skips_declarations_without_value() {
        let ir = lower(
            r#"
            [types.LonelyId]

            [types.OrderId]
            value = "System.Guid"
            "#,
        );

        let names: Vec<_> = ir.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["OrderId"]);
    }

    #[test]
    fn test_lower_copies_host_info() {
        let ir = lower(
            r#"
            [host]
            marker_visible = false
            marker_namespace = "Acme"

            [types.OrderId]
            value = "System.Guid"
            "#,
        );

        assert!(!ir.host.marker_visible);
        assert_eq!(ir.host.marker_namespace, "Acme");
        assert!(ir.descriptors.is_empty());
    }
}
