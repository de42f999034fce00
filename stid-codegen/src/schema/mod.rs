//! Pre-computed analysis data.
//!
//! - [`ComputedData`] - per-type classification and artifact plans
//! - [`ArtifactPlan`] - which sections each generated file contains
//! - [`PlanDisplay`] - human-readable rendering used by `stid explain`

mod computed;
mod display;
mod plan;

pub use computed::{ComputedData, ComputedType};
pub use display::{DisplayStyle, PlanDisplay};
pub use plan::{ArtifactPlan, PartialSection, SupportSection};
