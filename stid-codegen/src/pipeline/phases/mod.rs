//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the manifest
//! - [`LowerPhase`] - turns marked declarations into type descriptors
//! - [`AnalyzePhase`] - classifies descriptors and plans their artifacts

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::LowerPhase;
pub use validate::{
    FallbackCategoryLint, Lint, LintInfo, MissingValueLint, UnknownFlagLint, ValidatePhase,
};
