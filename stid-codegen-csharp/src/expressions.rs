//! C# expression templates per underlying type category.
//!
//! Every function is a pure lookup. `ty` is the source-level type name as
//! produced by [`CSharpTypeMapper`](crate::CSharpTypeMapper); only the
//! fallback category needs it.

use stid_ir::Category;

/// Name of the helper class used by fallback try-parse expressions.
pub const CONVERSION_HELPER: &str = "ConversionHelper";

/// Expression turning the string `value` into the underlying type.
pub fn parse(category: Category, ty: &str, value: &str) -> String {
    match category {
        Category::String => value.to_string(),
        Category::Fallback => format!("({ty})Convert.ChangeType({value}, typeof({ty}))"),
        _ => format!("{}.Parse({value})", native(category, ty)),
    }
}

/// Culture-aware parse expression, for categories with format providers.
pub fn parse_with_provider(
    category: Category,
    ty: &str,
    value: &str,
    provider: &str,
) -> Option<String> {
    category
        .supports_format_provider()
        .then(|| format!("{}.Parse({value}, {provider})", native(category, ty)))
}

/// Boolean try-parse expression declaring `result` as an out variable.
///
/// `None` for strings, which are assigned without parsing.
pub fn try_parse(category: Category, ty: &str, value: &str, result: &str) -> Option<String> {
    match category {
        Category::String => None,
        Category::Fallback => Some(format!(
            "{CONVERSION_HELPER}.TryConvert<{ty}>({value}, out var {result})"
        )),
        _ => Some(format!(
            "{}.TryParse({value}, out var {result})",
            native(category, ty)
        )),
    }
}

/// Culture-aware try-parse expression, for categories with format providers.
pub fn try_parse_with_provider(
    category: Category,
    ty: &str,
    value: &str,
    provider: &str,
    result: &str,
) -> Option<String> {
    if !category.supports_format_provider() {
        return None;
    }

    let ty = native(category, ty);
    Some(match category {
        Category::DateTime | Category::DateTimeOffset => format!(
            "{ty}.TryParse({value}, {provider}, System.Globalization.DateTimeStyles.None, out var {result})"
        ),
        _ => format!("{ty}.TryParse({value}, {provider}, out var {result})"),
    })
}

/// Expression producing a fresh value for `New()`.
pub fn new_value(category: Category, ty: &str) -> String {
    match category {
        Category::Guid => "Guid.NewGuid()".to_string(),
        Category::Int32 => "Random.Shared.Next()".to_string(),
        Category::Int64 => "Random.Shared.NextInt64()".to_string(),
        Category::Decimal => "(decimal)Random.Shared.NextDouble() * 1000000".to_string(),
        Category::Int16 => "(short)Random.Shared.Next(short.MinValue, short.MaxValue)".to_string(),
        Category::Byte => "(byte)Random.Shared.Next(byte.MinValue, byte.MaxValue)".to_string(),
        Category::Double => "Random.Shared.NextDouble()".to_string(),
        Category::Single => "(float)Random.Shared.NextDouble()".to_string(),
        Category::String => "Guid.NewGuid().ToString()".to_string(),
        Category::DateTime => "DateTime.UtcNow".to_string(),
        Category::DateTimeOffset => "DateTimeOffset.UtcNow".to_string(),
        Category::Fallback => format!("default({ty})"),
    }
}

/// The designated empty value, where the category has one.
pub fn empty_value(category: Category) -> Option<&'static str> {
    match category {
        Category::Guid => Some("Guid.Empty"),
        Category::DateTime => Some("DateTime.MinValue"),
        Category::DateTimeOffset => Some("DateTimeOffset.MinValue"),
        _ => None,
    }
}

/// Expression reading the underlying value from a `Utf8JsonReader` named `reader`.
pub fn json_read(category: Category) -> &'static str {
    match category {
        Category::Guid => "reader.GetGuid()",
        Category::Int32 => "reader.GetInt32()",
        Category::Int64 => "reader.GetInt64()",
        Category::Decimal => "reader.GetDecimal()",
        Category::Int16 => "reader.GetInt16()",
        Category::Byte => "reader.GetByte()",
        Category::Double => "reader.GetDouble()",
        Category::Single => "reader.GetSingle()",
        Category::DateTime => "reader.GetDateTime()",
        Category::DateTimeOffset => "reader.GetDateTimeOffset()",
        Category::String | Category::Fallback => "reader.GetString() ?? string.Empty",
    }
}

/// Statement writing `value` with a `Utf8JsonWriter` named `writer`.
pub fn json_write(category: Category, value: &str) -> String {
    if category.is_numeric() {
        format!("writer.WriteNumberValue({value})")
    } else if category.is_fallback() {
        format!("writer.WriteStringValue({value}?.ToString())")
    } else {
        format!("writer.WriteStringValue({value})")
    }
}

fn native(category: Category, ty: &str) -> &str {
    category.short_name().unwrap_or(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse(Category::Guid, "Guid", "value"), "Guid.Parse(value)");
        assert_eq!(parse(Category::Int16, "short", "s"), "short.Parse(s)");
        assert_eq!(parse(Category::String, "string", "value"), "value");
        assert_eq!(
            parse(Category::Fallback, "Money", "value"),
            "(Money)Convert.ChangeType(value, typeof(Money))"
        );
    }

    #[test]
    fn test_provider_forms_only_where_supported() {
        assert_eq!(
            parse_with_provider(Category::Decimal, "decimal", "value", "provider").as_deref(),
            Some("decimal.Parse(value, provider)")
        );
        assert_eq!(
            try_parse_with_provider(Category::DateTime, "DateTime", "value", "provider", "parsed")
                .as_deref(),
            Some(
                "DateTime.TryParse(value, provider, System.Globalization.DateTimeStyles.None, out var parsed)"
            )
        );
        assert_eq!(
            try_parse_with_provider(Category::Byte, "byte", "v", "p", "r").as_deref(),
            Some("byte.TryParse(v, p, out var r)")
        );

        for category in [Category::Guid, Category::String, Category::Fallback] {
            assert!(parse_with_provider(category, "T", "v", "p").is_none());
            assert!(try_parse_with_provider(category, "T", "v", "p", "r").is_none());
        }
    }

    #[test]
    fn test_try_parse_native_idioms() {
        for category in Category::RECOGNIZED {
            let ty = category.short_name().unwrap();
            match try_parse(category, ty, "value", "parsed") {
                Some(expr) => {
                    assert_eq!(expr, format!("{ty}.TryParse(value, out var parsed)"));
                    assert!(!expr.contains(CONVERSION_HELPER));
                }
                None => assert_eq!(category, Category::String),
            }
        }

        assert_eq!(
            try_parse(Category::Fallback, "Money", "value", "parsed").as_deref(),
            Some("ConversionHelper.TryConvert<Money>(value, out var parsed)")
        );
    }

    #[test]
    fn test_new_and_empty_values() {
        assert_eq!(new_value(Category::Guid, "Guid"), "Guid.NewGuid()");
        assert_eq!(new_value(Category::Int64, "long"), "Random.Shared.NextInt64()");
        assert_eq!(new_value(Category::Fallback, "Money"), "default(Money)");

        let with_empty: Vec<_> = Category::RECOGNIZED
            .into_iter()
            .filter(|c| empty_value(*c).is_some())
            .collect();
        assert_eq!(
            with_empty,
            vec![Category::Guid, Category::DateTime, Category::DateTimeOffset]
        );
        assert_eq!(empty_value(Category::Fallback), None);
    }

    #[test]
    fn test_json_expressions() {
        assert_eq!(json_read(Category::Single), "reader.GetSingle()");
        assert_eq!(
            json_read(Category::Fallback),
            "reader.GetString() ?? string.Empty"
        );
        assert_eq!(
            json_write(Category::Int32, "value.Value"),
            "writer.WriteNumberValue(value.Value)"
        );
        assert_eq!(
            json_write(Category::DateTime, "value.Value"),
            "writer.WriteStringValue(value.Value)"
        );
        assert_eq!(
            json_write(Category::Fallback, "value.Value"),
            "writer.WriteStringValue(value.Value?.ToString())"
        );
    }
}
