//! Check operation - manifest validation.

use std::path::Path;

use eyre::{Context, Result};
use stid_codegen::pipeline::{Pipeline, Severity};
use stid_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline to validate the manifest and returns diagnostics.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let type_count = ctx.computed.as_ref().map_or(0, |c| c.types.len());

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        type_count,
        errors,
        warnings,
        infos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_diagnostics_by_severity() {
        let manifest: Manifest = r#"
            [types.OrderId]
            value = "System.Guid"

            [types.OrderId.flags]
            GenerateSparkles = true

            [types.Sku]
            value = "Shop.Code"
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("stid.toml")).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.type_count, 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("--> types.OrderId.flags.GenerateSparkles"));
        assert_eq!(report.infos.len(), 1);
    }
}
