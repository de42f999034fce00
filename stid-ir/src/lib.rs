//! Intermediate representation types for the stid generator.
//!
//! This crate provides the type definitions shared across the stid
//! code generation pipeline: the descriptor of one strongly typed identifier,
//! its resolved feature flags, and the closed classification of the wrapped
//! primitive type.
//!
//! # Architecture
//!
//! ```text
//! stid.toml (TOML) → stid-manifest (parsing) → stid-ir (descriptors) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Host-agnostic (no knowledge of where a declaration came from)
//! - Immutable once built (generation never mutates a descriptor)
//! - Serializable, so pipeline snapshots can dump them as JSON

mod category;
mod descriptor;
mod flags;

pub use category::Category;
pub use descriptor::{GLOBAL_NAMESPACE, GenerationIR, HostInfo, TypeDescriptor};
pub use flags::{FeatureFlags, Flag};
