// ── Built-in node types ──
//
// Materialized once, on first run: each icon is extracted from the bundle
// into the icon directory and the resulting file URI is recorded.

use std::path::Path;

use url::Url;

use crate::error::ConfigError;
use crate::model::NodeTypeConfig;
use crate::resource::{ResourceBundle, extract};

/// A node type shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinNodeType {
    pub model: &'static str,
    pub display: &'static str,
    /// Logical bundle name of the icon.
    pub icon: &'static str,
    pub services: &'static [&'static str],
}

pub const BUILTIN_NODE_TYPES: [BuiltinNodeType; 3] = [
    BuiltinNodeType {
        model: "host",
        display: "Host",
        icon: "/icons/host-100.png",
        services: &["DefaultRoute", "SSH"],
    },
    BuiltinNodeType {
        model: "PC",
        display: "PC",
        icon: "/icons/pc-100.png",
        services: &["DefaultRoute"],
    },
    BuiltinNodeType {
        model: "mdr",
        display: "MDR",
        icon: "/icons/router-100.png",
        services: &["zebra", "OSPFv3MDR", "IPForward"],
    },
];

impl BuiltinNodeType {
    /// File name the icon gets inside the icon directory.
    pub fn icon_file_name(&self) -> &'static str {
        self.icon.rsplit('/').next().unwrap_or(self.icon)
    }

    /// Extract the icon into `icon_dir` and build the persisted template.
    fn materialize(
        &self,
        bundle: &dyn ResourceBundle,
        icon_dir: &Path,
    ) -> Result<NodeTypeConfig, ConfigError> {
        let destination = icon_dir.join(self.icon_file_name());
        extract(bundle, self.icon, &destination)?;
        let uri = Url::from_file_path(&destination)
            .map_err(|()| ConfigError::IconUri { path: destination })?;
        Ok(NodeTypeConfig::new(
            self.model,
            self.display,
            uri,
            self.services.iter().copied(),
        ))
    }
}

/// Build the built-in node types, extracting their icons into `icon_dir`.
///
/// Stops at the first failure; icons already extracted stay on disk.
pub fn build_defaults(
    bundle: &dyn ResourceBundle,
    icon_dir: &Path,
) -> Result<Vec<NodeTypeConfig>, ConfigError> {
    BUILTIN_NODE_TYPES
        .iter()
        .map(|builtin| builtin.materialize(bundle, icon_dir))
        .collect()
}
