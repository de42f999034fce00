//! Explain operation - pipeline and per-type plan explanation.

use std::path::Path;

use eyre::{Context, OptionExt, Result};
use stid_codegen::pipeline::Pipeline;
use stid_ir::Category;
use stid_manifest::Manifest;

use crate::reports::{ExplainReport, HostInfo, LintInfo, PhaseInfo, TypeInfo};

/// Execute the explain operation.
///
/// Runs the pipeline and returns what it does and what every type will get.
pub fn explain(manifest: &Manifest, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = pipeline
        .validate_phase()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;
    let computed = ctx
        .computed
        .as_ref()
        .ok_or_eyre("ComputedData not set - did AnalyzePhase run?")?;

    let types = computed
        .types
        .iter()
        .map(|ty| TypeInfo {
            name: ty.qualified_name.clone(),
            underlying: ty.descriptor.underlying_type.clone(),
            category: ty.category.to_string(),
            traits: category_traits(ty.category),
            disabled: ty
                .descriptor
                .flags
                .disabled()
                .into_iter()
                .map(|flag| flag.key().to_string())
                .collect(),
            partial: ty.plan.partial.iter().map(|s| s.as_str().to_string()).collect(),
            support: ty.plan.support.iter().map(|s| s.as_str().to_string()).collect(),
        })
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        host: HostInfo {
            marker_visible: manifest.host.marker_visible,
            marker_namespace: manifest.host.marker_namespace.clone(),
        },
        phases,
        lints,
        types,
        skipped: computed.skipped.clone(),
        file_count: computed.file_count(),
    })
}

fn category_traits(category: Category) -> Vec<&'static str> {
    [
        (category.is_numeric(), "numeric"),
        (category.is_comparable(), "comparable"),
        (category.has_empty_value(), "has empty value"),
        (category.supports_format_provider(), "format provider"),
        (category.is_fallback(), "generic conversion"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_traits() {
        assert_eq!(
            category_traits(Category::Guid),
            vec!["comparable", "has empty value"]
        );
        assert_eq!(
            category_traits(Category::Decimal),
            vec!["numeric", "comparable", "format provider"]
        );
        assert_eq!(category_traits(Category::Fallback), vec!["generic conversion"]);
    }

    #[test]
    fn test_explain_lists_types_and_skips() {
        let manifest: Manifest = r#"
            [types.OrderId]
            namespace = "Shop"
            value = "System.Guid"

            [types.OrderId.flags]
            GenerateExtensions = false

            [types.LonelyId]
        "#
        .parse()
        .unwrap();

        let report = explain(&manifest, Path::new("stid.toml")).unwrap();

        let phases: Vec<_> = report.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(phases, vec!["validate", "lower", "analyze"]);
        assert_eq!(report.lints.len(), 3);
        assert_eq!(report.types.len(), 1);
        assert_eq!(report.types[0].name, "Shop.OrderId");
        assert_eq!(report.types[0].category, "Guid");
        assert_eq!(report.types[0].disabled, vec!["GenerateExtensions"]);
        assert_eq!(report.skipped, vec!["LonelyId"]);
        assert_eq!(report.file_count, 2);
    }

    #[test]
    fn test_explain_bootstrap_run_lists_no_types() {
        let manifest: Manifest = r#"
            [host]
            marker_visible = false

            [types.OrderId]
            value = "System.Guid"

            [types.LonelyId]
        "#
        .parse()
        .unwrap();

        let report = explain(&manifest, Path::new("stid.toml")).unwrap();

        assert!(!report.host.marker_visible);
        assert!(report.types.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(report.file_count, 1);
    }
}
