//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    pub host: HostInfo,
    /// Pipeline phases, in execution order.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// Types that will be generated.
    pub types: Vec<TypeInfo>,
    /// Declared types without a resolvable `Value` member.
    pub skipped: Vec<String>,
    /// Number of files a run produces.
    pub file_count: usize,
}

/// What the host environment provides.
#[derive(Debug)]
pub struct HostInfo {
    pub marker_visible: bool,
    pub marker_namespace: String,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// Classification and planned sections of one type.
#[derive(Debug)]
pub struct TypeInfo {
    /// Qualified type name.
    pub name: String,
    /// Underlying type as written.
    pub underlying: String,
    pub category: String,
    /// Category traits (numeric, comparable, ...).
    pub traits: Vec<&'static str>,
    /// Flag keys turned off for this type.
    pub disabled: Vec<String>,
    /// Sections of the partial artifact.
    pub partial: Vec<String>,
    /// Sections of the support artifact.
    pub support: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("stid Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented(
            "Marker attribute",
            &format!(
                "{}.GenerateStronglyTypedIdSupportAttribute ({})",
                self.host.marker_namespace,
                if self.host.marker_visible {
                    "visible"
                } else {
                    "not visible, bootstrap run"
                }
            ),
        );
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section(&format!("Types ({})", self.types.len()));
        for ty in &self.types {
            out.list_item(&format!("{} ({})", ty.name, ty.underlying));
            out.key_value_indented("category", &ty.category);
            if !ty.traits.is_empty() {
                out.key_value_indented("traits", &ty.traits.join(", "));
            }
            if !ty.disabled.is_empty() {
                out.key_value_indented("disabled", &ty.disabled.join(", "));
            }
            out.key_value_indented("partial", &ty.partial.join(", "));
            let support = if ty.support.is_empty() {
                "(empty)".to_string()
            } else {
                ty.support.join(", ")
            };
            out.key_value_indented("support", &support);
        }
        out.newline();

        if !self.skipped.is_empty() {
            out.section("Skipped (no Value member)");
            for name in &self.skipped {
                out.list_item(name);
            }
            out.newline();
        }

        out.key_value("Files to generate", &self.file_count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_types() {
        let report = ExplainReport {
            config_path: PathBuf::from("stid.toml"),
            host: HostInfo {
                marker_visible: true,
                marker_namespace: "StronglyTypedIds".to_string(),
            },
            phases: vec![],
            lints: vec![],
            types: vec![TypeInfo {
                name: "Shop.Sku".to_string(),
                underlying: "Shop.Code".to_string(),
                category: "Fallback".to_string(),
                traits: vec!["generic conversion"],
                disabled: vec!["GenerateExtensions".to_string()],
                partial: vec!["ToString()".to_string()],
                support: vec![],
            }],
            skipped: vec!["LonelyId".to_string()],
            file_count: 2,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        stid Pipeline Explanation
        =========================

        Input: stid.toml
          Marker attribute: StronglyTypedIds.GenerateStronglyTypedIdSupportAttribute (visible)

        Pipeline Phases:

        Validation Lints:

        Types (1):
          - Shop.Sku (Shop.Code)
          category: Fallback
          traits: generic conversion
          disabled: GenerateExtensions
          partial: ToString()
          support: (empty)

        Skipped (no Value member):
          - LonelyId

        Files to generate: 2
        ");
    }
}
