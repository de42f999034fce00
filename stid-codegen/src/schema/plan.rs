//! Which sections each generated artifact contains.
//!
//! The plan is derived from the category and the flags alone, so both
//! artifacts of a descriptor (and `stid explain`) agree on what gets emitted.

use serde::Serialize;
use stid_ir::{Category, FeatureFlags};

/// A section of the partial artifact, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartialSection {
    DebuggerDisplay,
    JsonConverterAttribute,
    TypeConverterAttribute,
    From,
    FromWithProvider,
    TryParse,
    TryParseWithProvider,
    New,
    Empty,
    ToString,
    Conversions,
    Comparisons,
}

impl PartialSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartialSection::DebuggerDisplay => "debugger display attribute",
            PartialSection::JsonConverterAttribute => "JSON converter attribute",
            PartialSection::TypeConverterAttribute => "type converter attribute",
            PartialSection::From => "From(string)",
            PartialSection::FromWithProvider => "From(string, IFormatProvider?)",
            PartialSection::TryParse => "TryParse(string?)",
            PartialSection::TryParseWithProvider => "TryParse(string?, IFormatProvider?)",
            PartialSection::New => "New()",
            PartialSection::Empty => "Empty",
            PartialSection::ToString => "ToString()",
            PartialSection::Conversions => "implicit/explicit conversions",
            PartialSection::Comparisons => "CompareTo and relational operators",
        }
    }
}

/// A section of the support artifact, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupportSection {
    JsonConverter,
    TypeConverter,
    /// Collection helpers; `empty_checks` adds `IsEmpty`/`IsNotEmpty`.
    Extensions { empty_checks: bool },
    ConversionHelper,
}

impl SupportSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportSection::JsonConverter => "JSON converter",
            SupportSection::TypeConverter => "type converter",
            SupportSection::Extensions { empty_checks: true } => "extensions (with empty checks)",
            SupportSection::Extensions { empty_checks: false } => "extensions",
            SupportSection::ConversionHelper => "conversion helper",
        }
    }
}

/// Sections of both artifacts for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub partial: Vec<PartialSection>,
    pub support: Vec<SupportSection>,
}

impl ArtifactPlan {
    pub fn new(category: Category, flags: &FeatureFlags) -> Self {
        let provider = category.supports_format_provider();

        let partial = [
            (PartialSection::DebuggerDisplay, true),
            (PartialSection::JsonConverterAttribute, flags.json_converter),
            (PartialSection::TypeConverterAttribute, flags.type_converter),
            (PartialSection::From, flags.parse_method),
            (PartialSection::FromWithProvider, flags.parse_method && provider),
            (PartialSection::TryParse, flags.try_parse_method),
            (
                PartialSection::TryParseWithProvider,
                flags.try_parse_method && provider,
            ),
            (PartialSection::New, flags.new_method),
            (PartialSection::Empty, category.has_empty_value()),
            (PartialSection::ToString, true),
            (PartialSection::Conversions, true),
            (
                PartialSection::Comparisons,
                flags.comparisons && category.is_comparable(),
            ),
        ];

        let support = [
            (SupportSection::JsonConverter, flags.json_converter),
            (SupportSection::TypeConverter, flags.type_converter),
            (
                SupportSection::Extensions {
                    empty_checks: category.has_empty_value(),
                },
                flags.extensions,
            ),
            (
                SupportSection::ConversionHelper,
                category.is_fallback() && flags.try_parse_method,
            ),
        ];

        Self {
            partial: enabled(partial),
            support: enabled(support),
        }
    }

    pub fn has_partial(&self, section: PartialSection) -> bool {
        self.partial.contains(&section)
    }

    pub fn has_support(&self, section: SupportSection) -> bool {
        self.support.contains(&section)
    }

    /// The declaration implements `IComparable<T>`.
    pub fn is_comparable(&self) -> bool {
        self.has_partial(PartialSection::Comparisons)
    }

    pub fn needs_conversion_helper(&self) -> bool {
        self.has_support(SupportSection::ConversionHelper)
    }

    /// `Extensions` section, if planned.
    pub fn extensions(&self) -> Option<SupportSection> {
        self.support
            .iter()
            .copied()
            .find(|s| matches!(s, SupportSection::Extensions { .. }))
    }
}

fn enabled<T, const N: usize>(sections: [(T, bool); N]) -> Vec<T> {
    sections
        .into_iter()
        .filter_map(|(section, on)| on.then_some(section))
        .collect()
}

#[cfg(test)]
mod tests {
    use stid_ir::Flag;

    use super::*;

    #[test]
    fn test_guid_defaults() {
        let plan = ArtifactPlan::new(Category::Guid, &FeatureFlags::default());

        assert_eq!(
            plan.partial,
            vec![
                PartialSection::DebuggerDisplay,
                PartialSection::JsonConverterAttribute,
                PartialSection::TypeConverterAttribute,
                PartialSection::From,
                PartialSection::TryParse,
                PartialSection::New,
                PartialSection::Empty,
                PartialSection::ToString,
                PartialSection::Conversions,
                PartialSection::Comparisons,
            ]
        );
        assert_eq!(
            plan.support,
            vec![
                SupportSection::JsonConverter,
                SupportSection::TypeConverter,
                SupportSection::Extensions { empty_checks: true },
            ]
        );
    }

    #[test]
    fn test_numeric_gets_provider_overloads() {
        let plan = ArtifactPlan::new(Category::Int32, &FeatureFlags::default());
        assert!(plan.has_partial(PartialSection::FromWithProvider));
        assert!(plan.has_partial(PartialSection::TryParseWithProvider));
        assert!(!plan.has_partial(PartialSection::Empty));
        assert_eq!(
            plan.extensions(),
            Some(SupportSection::Extensions { empty_checks: false })
        );
    }

    #[test]
    fn test_all_flags_disabled() {
        let plan = ArtifactPlan::new(Category::String, &FeatureFlags::all(false));
        assert_eq!(
            plan.partial,
            vec![
                PartialSection::DebuggerDisplay,
                PartialSection::ToString,
                PartialSection::Conversions,
            ]
        );
        assert!(plan.support.is_empty());
    }

    #[test]
    fn test_fallback_needs_helper_only_with_try_parse() {
        let plan = ArtifactPlan::new(Category::Fallback, &FeatureFlags::default());
        assert!(plan.needs_conversion_helper());
        assert!(!plan.is_comparable());

        let flags = FeatureFlags::default().with(Flag::TryParseMethod, false);
        let plan = ArtifactPlan::new(Category::Fallback, &flags);
        assert!(!plan.needs_conversion_helper());
    }

    #[test]
    fn test_each_flag_removes_only_its_sections() {
        let full = ArtifactPlan::new(Category::Int64, &FeatureFlags::default());

        for flag in Flag::ALL {
            let plan = ArtifactPlan::new(Category::Int64, &FeatureFlags::default().with(flag, false));
            let removed_partial: Vec<_> = full
                .partial
                .iter()
                .filter(|s| !plan.partial.contains(s))
                .copied()
                .collect();
            let removed_support: Vec<_> = full
                .support
                .iter()
                .filter(|s| !plan.support.contains(s))
                .copied()
                .collect();

            let (expected_partial, expected_support) = match flag {
                Flag::JsonConverter => (
                    vec![PartialSection::JsonConverterAttribute],
                    vec![SupportSection::JsonConverter],
                ),
                Flag::TypeConverter => (
                    vec![PartialSection::TypeConverterAttribute],
                    vec![SupportSection::TypeConverter],
                ),
                Flag::ParseMethod => (
                    vec![PartialSection::From, PartialSection::FromWithProvider],
                    vec![],
                ),
                Flag::TryParseMethod => (
                    vec![
                        PartialSection::TryParse,
                        PartialSection::TryParseWithProvider,
                    ],
                    vec![],
                ),
                Flag::Comparisons => (vec![PartialSection::Comparisons], vec![]),
                Flag::NewMethod => (vec![PartialSection::New], vec![]),
                Flag::Extensions => (
                    vec![],
                    vec![SupportSection::Extensions {
                        empty_checks: false,
                    }],
                ),
            };

            assert_eq!(removed_partial, expected_partial, "flag {flag}");
            assert_eq!(removed_support, expected_support, "flag {flag}");
        }
    }

    #[test]
    fn test_disabling_comparisons_keeps_new() {
        let flags = FeatureFlags::default().with(Flag::Comparisons, false);
        let plan = ArtifactPlan::new(Category::Guid, &flags);
        assert!(plan.has_partial(PartialSection::New));
        assert!(!plan.is_comparable());
    }
}
