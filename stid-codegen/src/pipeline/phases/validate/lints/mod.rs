//! Built-in lints for manifest validation.

mod fallback_category;
mod missing_value;
mod unknown_flag;

pub use fallback_category::FallbackCategoryLint;
pub use missing_value::MissingValueLint;
pub use unknown_flag::UnknownFlagLint;
