use serde::Deserialize;

/// `[host]` section: facts about the consuming project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Whether the marker attribute is already compiled into the host
    #[serde(default = "default_marker_visible")]
    pub marker_visible: bool,

    /// Namespace of the marker attribute
    #[serde(default = "default_marker_namespace")]
    pub marker_namespace: String,
}

fn default_marker_visible() -> bool {
    true
}

fn default_marker_namespace() -> String {
    "StronglyTypedIds".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            marker_visible: default_marker_visible(),
            marker_namespace: default_marker_namespace(),
        }
    }
}
