//! Lint for declarations without a usable `Value` member.

use stid_manifest::{Manifest, ValueLookup};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about types that will be skipped because no `Value` member can be
/// found on them or their bases.
pub struct MissingValueLint;

impl Lint for MissingValueLint {
    fn name(&self) -> &'static str {
        "missing-value"
    }

    fn description(&self) -> &'static str {
        "Report declarations that are skipped for lack of a Value member"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for name in manifest.types.keys() {
            let message = match manifest.resolve_value(name) {
                ValueLookup::Own(_) | ValueLookup::Inherited { .. } => continue,
                ValueLookup::Missing => {
                    format!("type '{name}' has no Value member; no code is generated for it")
                }
                ValueLookup::Cycle(chain) => format!(
                    "base chain of '{name}' is circular ({}); no code is generated for it",
                    chain.join(" -> ")
                ),
            };

            diagnostics.push(Diagnostic::warning("validate", message).at(format!("types.{name}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(src: &str) -> Vec<Diagnostic> {
        let manifest: Manifest = src.parse().unwrap();
        let mut diagnostics = Vec::new();
        MissingValueLint.check(&manifest, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_value_present_or_inherited() {
        let diagnostics = check(
            r#"
            [bases.Identifier]
            value = "long"

            [types.OrderId]
            value = "System.Guid"

            [types.TenantId]
            base = "Identifier"
            "#,
        );

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_value() {
        let diagnostics = check(
            r#"
            [types.LonelyId]

            [types.OrphanId]
            base = "Nowhere"
            "#,
        );

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert!(diagnostics[0].message.contains("LonelyId"));
        assert_eq!(diagnostics[1].location.as_deref(), Some("types.OrphanId"));
    }

    #[test]
    fn test_cycle_is_reported() {
        let diagnostics = check(
            r#"
            [bases.A]
            base = "B"

            [bases.B]
            base = "A"

            [types.LoopId]
            base = "A"
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("circular"));
    }
}
