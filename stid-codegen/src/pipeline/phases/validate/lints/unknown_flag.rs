//! Lint for flag assignments that have no effect.

use stid_core::toml_value_kind;
use stid_ir::Flag;
use stid_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about flag keys that are not recognized and flag values that are
/// not booleans. Both are ignored during generation.
pub struct UnknownFlagLint;

impl Lint for UnknownFlagLint {
    fn name(&self) -> &'static str {
        "unknown-flag"
    }

    fn description(&self) -> &'static str {
        "Report ignored flag keys and non-boolean flag values"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (name, decl) in &manifest.types {
            for (key, value) in &decl.flags {
                let location = format!("types.{name}.flags.{key}");

                if Flag::from_key(key).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("unknown flag '{key}' on type '{name}' is ignored"),
                        )
                        .at(location),
                    );
                } else if !value.is_bool() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "flag '{key}' on type '{name}' must be a boolean, found {}; the default is used",
                                toml_value_kind(value)
                            ),
                        )
                        .at(location),
                    );
                }
            }
        }
    }
}
