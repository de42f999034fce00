//! Core utilities and types for the stid generator.
//!
//! This crate provides the file-writing primitives and identifier helpers
//! shared by the manifest parser, the pipeline and the C# backend.

mod file;
mod ident;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// C# identifier rules
pub use ident::{CSHARP_KEYWORDS, GLOBAL_NAMESPACE, is_csharp_keyword, last_segment, validate_identifier};
// TOML helpers
pub use utils::toml_value_kind;
