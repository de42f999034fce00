//! Generated file definitions.

mod marker_attribute;
mod partial_cs;
mod support_cs;

pub use marker_attribute::{MARKER_ATTRIBUTE, MarkerAttribute};
pub use partial_cs::PartialCs;
pub use support_cs::SupportCs;
