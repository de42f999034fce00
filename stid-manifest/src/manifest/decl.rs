use indexmap::IndexMap;
use serde::Deserialize;

/// A marked identifier declaration, `[types.<Name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    /// Containing namespace
    pub namespace: Option<String>,

    /// Type of the declaration's own `Value` member
    pub value: Option<String>,

    /// Base declaration to search for `Value` when `value` is absent
    pub base: Option<String>,

    /// Raw marker arguments, resolved later into feature flags
    #[serde(default)]
    pub flags: IndexMap<String, toml::Value>,
}

impl TypeDecl {
    /// Flag assignments with a boolean value, in declaration order.
    ///
    /// Entries with any other value kind are left out and therefore fall
    /// back to their defaults.
    pub fn boolean_flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags
            .iter()
            .filter_map(|(key, value)| value.as_bool().map(|b| (key.as_str(), b)))
    }
}

/// A base declaration, `[bases.<Name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseDecl {
    /// Type of the `Value` member declared here
    pub value: Option<String>,

    /// Further base declaration
    pub base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_flags_skip_other_kinds() {
        let decl: TypeDecl = toml::from_str(
            r#"
            value = "int"

            [flags]
            GenerateComparisons = false
            GenerateNewMethod = "no"
            GenerateExtensions = true
            "#,
        )
        .unwrap();

        let flags: Vec<_> = decl.boolean_flags().collect();
        assert_eq!(
            flags,
            vec![("GenerateComparisons", false), ("GenerateExtensions", true)]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<TypeDecl, _> = toml::from_str("valeu = \"int\"");
        assert!(result.is_err());
    }
}
