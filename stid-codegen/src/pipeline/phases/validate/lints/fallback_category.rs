//! Lint noting types that use fallback conversion.

use stid_ir::Category;
use stid_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Reports types whose underlying type is not one of the recognized
/// categories. Such types parse through the generated conversion helper and
/// get no comparison members.
pub struct FallbackCategoryLint;

impl Lint for FallbackCategoryLint {
    fn name(&self) -> &'static str {
        "fallback-category"
    }

    fn description(&self) -> &'static str {
        "Note types that use runtime conversion instead of a recognized category"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for name in manifest.types.keys() {
            let Some(value) = manifest.resolve_value(name).value() else {
                continue;
            };
            if Category::classify(value).is_fallback() {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "type '{name}' wraps '{value}', which is converted at runtime and is not comparable"
                        ),
                    )
                    .at(format!("types.{name}")),
                );
            }
        }
    }
}
