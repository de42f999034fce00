//! C# type mapper implementation.

use stid_codegen::language::TypeMapper;
use stid_core::last_segment;
use stid_ir::Category;

/// Maps classified underlying types to the names used in generated C#.
///
/// Recognized categories use their keyword or short BCL name (`int`,
/// `Guid`); anything else uses the last segment of its display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_underlying(&self, category: Category, display_name: &str) -> String {
        match category.short_name() {
            Some(name) => name.to_string(),
            None => last_segment(display_name).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(display_name: &str) -> String {
        CSharpTypeMapper.map_underlying(Category::classify(display_name), display_name)
    }

    #[test]
    fn test_recognized_types_use_short_names() {
        assert_eq!(map("System.Int32"), "int");
        assert_eq!(map("int"), "int");
        assert_eq!(map("System.Guid"), "Guid");
        assert_eq!(map("System.Single"), "float");
        assert_eq!(map("System.DateTimeOffset"), "DateTimeOffset");
    }

    #[test]
    fn test_fallback_uses_last_segment() {
        assert_eq!(map("Demo.Money"), "Money");
        assert_eq!(map("uint"), "uint");
        assert_eq!(map("Acme.Billing.Code"), "Code");
    }
}
