//! Feature flags controlling which capabilities get generated.

use serde::Serialize;

/// One of the recognized feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Flag {
    JsonConverter,
    TypeConverter,
    ParseMethod,
    TryParseMethod,
    Comparisons,
    NewMethod,
    Extensions,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Flag::JsonConverter,
        Flag::TypeConverter,
        Flag::ParseMethod,
        Flag::TryParseMethod,
        Flag::Comparisons,
        Flag::NewMethod,
        Flag::Extensions,
    ];

    /// The key used in declarations, e.g. `GenerateJsonConverter`.
    pub fn key(&self) -> &'static str {
        match self {
            Flag::JsonConverter => "GenerateJsonConverter",
            Flag::TypeConverter => "GenerateTypeConverter",
            Flag::ParseMethod => "GenerateParseMethod",
            Flag::TryParseMethod => "GenerateTryParseMethod",
            Flag::Comparisons => "GenerateComparisons",
            Flag::NewMethod => "GenerateNewMethod",
            Flag::Extensions => "GenerateExtensions",
        }
    }

    /// Look up a flag by its declaration key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved feature flags. Every flag defaults to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub json_converter: bool,
    pub type_converter: bool,
    pub parse_method: bool,
    pub try_parse_method: bool,
    pub comparisons: bool,
    pub new_method: bool,
    pub extensions: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all(true)
    }
}

impl FeatureFlags {
    /// Every flag set to `enabled`.
    pub fn all(enabled: bool) -> Self {
        Self {
            json_converter: enabled,
            type_converter: enabled,
            parse_method: enabled,
            try_parse_method: enabled,
            comparisons: enabled,
            new_method: enabled,
            extensions: enabled,
        }
    }

    /// Resolve raw key/value pairs into a complete flag set.
    ///
    /// Absent keys stay enabled and unrecognized keys are ignored. When a key
    /// appears more than once the last value wins.
    pub fn resolve<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        raw.into_iter()
            .filter_map(|(key, value)| Flag::from_key(key).map(|flag| (flag, value)))
            .fold(Self::default(), |flags, (flag, value)| flags.with(flag, value))
    }

    /// Return a copy with one flag changed.
    pub fn with(mut self, flag: Flag, enabled: bool) -> Self {
        *self.slot(flag) = enabled;
        self
    }

    pub fn is_enabled(&self, flag: Flag) -> bool {
        match flag {
            Flag::JsonConverter => self.json_converter,
            Flag::TypeConverter => self.type_converter,
            Flag::ParseMethod => self.parse_method,
            Flag::TryParseMethod => self.try_parse_method,
            Flag::Comparisons => self.comparisons,
            Flag::NewMethod => self.new_method,
            Flag::Extensions => self.extensions,
        }
    }

    /// Flags that are currently switched off, in canonical order.
    pub fn disabled(&self) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|flag| !self.is_enabled(*flag))
            .collect()
    }

    fn slot(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::JsonConverter => &mut self.json_converter,
            Flag::TypeConverter => &mut self.type_converter,
            Flag::ParseMethod => &mut self.parse_method,
            Flag::TryParseMethod => &mut self.try_parse_method,
            Flag::Comparisons => &mut self.comparisons,
            Flag::NewMethod => &mut self.new_method,
            Flag::Extensions => &mut self.extensions,
        }
    }
}
