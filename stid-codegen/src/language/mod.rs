//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - main trait for language code generators
//! - [`TypeMapper`] - maps classified underlying types to source names
//! - [`GenerateResult`] - result of code generation
//! - [`PreviewFile`] - generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
