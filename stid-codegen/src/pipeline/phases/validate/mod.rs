//! Validate phase - runs lints on the manifest.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{FallbackCategoryLint, MissingValueLint, UnknownFlagLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the manifest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingValueLint),
                Box::new(UnknownFlagLint),
                Box::new(FallbackCategoryLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check declarations and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        if ctx.is_bootstrap() {
            return Ok(());
        }

        for lint in &self.lints {
            lint.check(&ctx.manifest, &mut ctx.diagnostics);
        }

        // warnings and infos never stop generation
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use stid_manifest::Manifest;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn parse(src: &str) -> Manifest {
        src.parse().expect("test manifest should parse")
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec!["missing-value", "unknown-flag", "fallback-category"]
        );
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(Manifest::default());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let manifest = parse(
            r#"
            [types.LonelyId]

            [types.OrderId]
            value = "System.Guid"

            [types.OrderId.flags]
            GenerateSparkles = true
            "#,
        );
        let mut ctx = CompilationContext::new(manifest);

        assert!(ValidatePhase::new().run(&mut ctx).is_ok());
        assert_eq!(ctx.warning_count(), 2);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_bootstrap_run_skips_lints() {
        let manifest = parse(
            r#"
            [host]
            marker_visible = false

            [types.LonelyId]

            [types.Sku]
            value = "Shop.Code"

            [types.Sku.flags]
            GenerateSparkles = true
            "#,
        );
        let mut ctx = CompilationContext::new(manifest);

        assert!(ValidatePhase::new().run(&mut ctx).is_ok());
        assert!(ctx.diagnostics.is_empty());
    }
}
