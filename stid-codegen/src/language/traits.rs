//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use stid_ir::Category;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g. "g.cs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<String>,
    /// Files that already had identical content
    pub unchanged: Vec<String>,
    /// Only the marker attribute was generated this run
    pub bootstrap_only: bool,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Maps a classified underlying type to the name used in generated source.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Source-level name for `display_name`, which classified as `category`.
    fn map_underlying(&self, category: Category, display_name: &str) -> String;
}
