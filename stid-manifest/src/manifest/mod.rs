//! Manifest types and parsing for stid.toml files.

mod decl;
mod file;
mod host;
mod parse;
mod validate;

pub use decl::{BaseDecl, TypeDecl};
pub use file::StidToml;
pub use host::HostConfig;
use indexmap::IndexMap;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for stid.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// What the host environment provides
    #[serde(default)]
    pub host: HostConfig,

    /// Base declarations that provide a `Value` member but are not generated
    #[serde(default)]
    pub bases: IndexMap<String, BaseDecl>,

    /// Marked identifier declarations, in declaration order
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
}

/// Outcome of looking up the `Value` member of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueLookup<'a> {
    /// Declared on the type itself.
    Own(&'a str),
    /// Found on a base declaration.
    Inherited { value: &'a str, from: &'a str },
    /// No base declares a value (or the chain is unresolved).
    Missing,
    /// The base chain loops back on itself.
    Cycle(Vec<&'a str>),
}

impl<'a> ValueLookup<'a> {
    /// The underlying type name, if one was found.
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            ValueLookup::Own(value) | ValueLookup::Inherited { value, .. } => Some(value),
            ValueLookup::Missing | ValueLookup::Cycle(_) => None,
        }
    }
}

impl Manifest {
    /// Locate the `Value` member of a marked type.
    ///
    /// The type's own declaration wins, then each base in turn. Bases may be
    /// other marked types as well as `[bases]` entries.
    pub fn resolve_value(&self, type_name: &str) -> ValueLookup<'_> {
        let Some((name, value, base)) = self.lookup(type_name) else {
            return ValueLookup::Missing;
        };

        if let Some(value) = value {
            return ValueLookup::Own(value);
        }

        let mut visited = vec![name];
        let mut next = base;

        while let Some(base) = next {
            if visited.contains(&base) {
                visited.push(base);
                return ValueLookup::Cycle(visited);
            }
            visited.push(base);

            let Some((name, value, parent)) = self.lookup(base) else {
                return ValueLookup::Missing;
            };
            if let Some(value) = value {
                return ValueLookup::Inherited { value, from: name };
            }
            next = parent;
        }

        ValueLookup::Missing
    }

    /// Name, value and base of a declaration, marked types first.
    fn lookup(&self, name: &str) -> Option<(&str, Option<&str>, Option<&str>)> {
        if let Some((name, decl)) = self.types.get_key_value(name) {
            return Some((name.as_str(), decl.value.as_deref(), decl.base.as_deref()));
        }
        self.bases
            .get_key_value(name)
            .map(|(name, decl)| (name.as_str(), decl.value.as_deref(), decl.base.as_deref()))
    }
}
