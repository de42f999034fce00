//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use stid_ir::GenerationIR;
use stid_manifest::Manifest;

use super::diagnostic::Diagnostic;
use crate::schema::ComputedData;

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The original manifest being compiled.
    pub manifest: Manifest,
    /// Lowered descriptors (populated by LowerPhase).
    pub ir: Option<GenerationIR>,
    /// Per-type classification and artifact plans (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    /// The host does not see the marker attribute yet. Such a run emits only
    /// the marker and leaves the declared types alone.
    pub fn is_bootstrap(&self) -> bool {
        !self.manifest.host.marker_visible
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the IR out of the context.
    ///
    /// # Errors
    ///
    /// Fails if LowerPhase hasn't run.
    pub fn take_ir(&mut self) -> Result<GenerationIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }

    /// Take the computed data out of the context.
    ///
    /// # Errors
    ///
    /// Fails if AnalyzePhase hasn't run.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("ComputedData not set - did AnalyzePhase run?"))
    }
}
