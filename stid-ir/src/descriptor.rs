//! Identifier descriptors and the generation IR.
//!
//! ```text
//! stid.toml → Manifest (parsing) → GenerationIR (lowering) → Generator (codegen)
//! ```

use serde::Serialize;
pub use stid_core::GLOBAL_NAMESPACE;

use crate::FeatureFlags;

/// Generation IR - everything the backend needs for one run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationIR {
    /// What the host environment already provides.
    pub host: HostInfo,
    /// Identifier declarations, in declaration order.
    pub descriptors: Vec<TypeDescriptor>,
}

/// Facts about the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    /// Whether the marker attribute is already visible to the host.
    pub marker_visible: bool,
    /// Namespace the marker attribute lives in.
    pub marker_namespace: String,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            marker_visible: true,
            marker_namespace: "StronglyTypedIds".to_string(),
        }
    }
}

/// Host-agnostic description of one strongly typed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Simple type name, e.g. `OrderId`.
    pub name: String,
    /// Containing namespace, if any.
    pub namespace: Option<String>,
    /// Display name of the wrapped primitive, e.g. `System.Guid`.
    pub underlying_type: String,
    /// Resolved feature flags.
    pub flags: FeatureFlags,
}

impl TypeDescriptor {
    /// Create a descriptor with default flags and no namespace.
    pub fn new(name: impl Into<String>, underlying_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            underlying_type: underlying_type.into(),
            flags: FeatureFlags::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The namespace to declare in generated files.
    ///
    /// Empty namespaces and the global-namespace sentinel yield `None`.
    pub fn declared_namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .filter(|ns| !ns.is_empty() && *ns != GLOBAL_NAMESPACE)
    }

    /// Fully qualified name, used in diagnostics.
    pub fn qualified_name(&self) -> String {
        match self.declared_namespace() {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}
