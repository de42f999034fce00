//! C# identifier rules.

/// Namespace reported by hosts for declarations outside any namespace.
pub const GLOBAL_NAMESPACE: &str = "<global namespace>";

/// C# reserved keywords that cannot be used as bare identifiers.
/// Contextual keywords (`record`, `var`, `value`, ...) are legal names and not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Validate that a name can be used as a C# type or namespace segment.
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_csharp_keyword(name) {
        return Some("name is a C# reserved keyword");
    }

    None
}

/// Last `.`-separated segment of a dotted name (`Demo.Money` -> `Money`).
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("OrderId").is_none());
        assert!(validate_identifier("_internal").is_none());
        assert!(validate_identifier("Id2").is_none());
        assert!(validate_identifier("record").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("2Fast"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("Order-Id"),
            Some("name must contain only letters, numbers, and underscores")
        );
        assert_eq!(
            validate_identifier("class"),
            Some("name is a C# reserved keyword")
        );
    }

    #[test]
    fn test_keywords() {
        assert!(is_csharp_keyword("namespace"));
        assert!(is_csharp_keyword("int"));
        assert!(!is_csharp_keyword("Guid"));
        assert!(!is_csharp_keyword("var"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("Demo.Money"), "Money");
        assert_eq!(last_segment("Money"), "Money");
        assert_eq!(last_segment("A.B.C"), "C");
        assert_eq!(last_segment(""), "");
    }
}
