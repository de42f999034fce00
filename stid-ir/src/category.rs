//! Classification of wrapped primitive types.

use serde::Serialize;

/// Semantic category of the primitive wrapped by an identifier.
///
/// The set is closed. Anything that is not one of the recognized primitives
/// lands in [`Category::Fallback`] and is handled through generic conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Guid,
    Int32,
    Int64,
    Decimal,
    Int16,
    Byte,
    Double,
    Single,
    String,
    DateTime,
    DateTimeOffset,
    Fallback,
}

impl Category {
    /// Every recognized category, in declaration order (excludes `Fallback`).
    pub const RECOGNIZED: [Category; 11] = [
        Category::Guid,
        Category::Int32,
        Category::Int64,
        Category::Decimal,
        Category::Int16,
        Category::Byte,
        Category::Double,
        Category::Single,
        Category::String,
        Category::DateTime,
        Category::DateTimeOffset,
    ];

    /// Classify a primitive type by its display name.
    ///
    /// Matching is exact and case-sensitive. Both the qualified form
    /// (`System.Int32`) and the short form (`int`) are accepted.
    pub fn classify(type_name: &str) -> Self {
        match type_name {
            "System.Guid" | "Guid" => Category::Guid,
            "System.Int32" | "int" => Category::Int32,
            "System.Int64" | "long" => Category::Int64,
            "System.Decimal" | "decimal" => Category::Decimal,
            "System.Int16" | "short" => Category::Int16,
            "System.Byte" | "byte" => Category::Byte,
            "System.Double" | "double" => Category::Double,
            "System.Single" | "float" => Category::Single,
            "System.String" | "string" => Category::String,
            "System.DateTime" | "DateTime" => Category::DateTime,
            "System.DateTimeOffset" | "DateTimeOffset" => Category::DateTimeOffset,
            _ => Category::Fallback,
        }
    }

    /// Short source-level name of a recognized category.
    ///
    /// Returns `None` for `Fallback`, whose name comes from the declaration.
    pub fn short_name(&self) -> Option<&'static str> {
        let name = match self {
            Category::Guid => "Guid",
            Category::Int32 => "int",
            Category::Int64 => "long",
            Category::Decimal => "decimal",
            Category::Int16 => "short",
            Category::Byte => "byte",
            Category::Double => "double",
            Category::Single => "float",
            Category::String => "string",
            Category::DateTime => "DateTime",
            Category::DateTimeOffset => "DateTimeOffset",
            Category::Fallback => return None,
        };
        Some(name)
    }

    /// Whether values of this category have a natural ordering.
    pub fn is_comparable(&self) -> bool {
        !self.is_fallback()
    }

    /// Whether the category has a well-known "empty" sentinel value.
    pub fn has_empty_value(&self) -> bool {
        matches!(
            self,
            Category::Guid | Category::DateTime | Category::DateTimeOffset
        )
    }

    /// Whether culture-aware parsing overloads exist for this category.
    pub fn supports_format_provider(&self) -> bool {
        self.is_numeric() || matches!(self, Category::DateTime | Category::DateTimeOffset)
    }

    /// Returns true for the seven numeric categories.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Category::Int32
                | Category::Int64
                | Category::Decimal
                | Category::Int16
                | Category::Byte
                | Category::Double
                | Category::Single
        )
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Category::Fallback)
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Guid => "Guid",
            Category::Int32 => "Int32",
            Category::Int64 => "Int64",
            Category::Decimal => "Decimal",
            Category::Int16 => "Int16",
            Category::Byte => "Byte",
            Category::Double => "Double",
            Category::Single => "Single",
            Category::String => "String",
            Category::DateTime => "DateTime",
            Category::DateTimeOffset => "DateTimeOffset",
            Category::Fallback => "Fallback",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
