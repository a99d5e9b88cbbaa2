// ── Persisted configuration types ──
//
// Field names and order mirror the `config.json` document:
// `xmlPath`, `mobilityPath`, `iconPath`, `coreRest`, `nodeTypeConfigs`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The application configuration stored in `~/.core/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Directory holding saved session XML files.
    #[serde(default)]
    pub xml_path: PathBuf,
    /// Directory holding mobility scripts.
    #[serde(default)]
    pub mobility_path: PathBuf,
    /// Directory holding node-type icons.
    #[serde(default)]
    pub icon_path: PathBuf,
    /// REST endpoint of the CORE daemon. Set from the invocation, never
    /// from the seed.
    #[serde(default)]
    pub core_rest: Option<String>,
    /// Node types in document order.
    #[serde(default)]
    pub node_type_configs: Vec<NodeTypeConfig>,
}

/// A node-type template as persisted in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeConfig {
    /// Short identifier, e.g. `host` or `mdr`.
    pub model: String,
    /// Human-readable label.
    pub display: String,
    /// `file://` URI of the icon on disk.
    pub icon: String,
    #[serde(default)]
    pub services: Vec<String>,
}

impl NodeTypeConfig {
    pub fn new(
        model: impl Into<String>,
        display: impl Into<String>,
        icon: impl Into<String>,
        services: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            model: model.into(),
            display: display.into(),
            icon: icon.into(),
            services: services.into_iter().map(Into::into).collect(),
        }
    }

    /// Sort `services` ascending by byte order, in place.
    pub fn sort_services(&mut self) {
        self.services.sort_unstable();
    }
}
