// ── Node-type registry records ──
//
// `NodeType` is the runtime form of a `NodeTypeConfig`, tagged with the
// category it belongs to. Bootstrap produces them; the application owns a
// `NodeTypeRegistry` and installs them there.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::model::NodeTypeConfig;

/// Node category as understood by the CORE daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeCategory {
    Default,
    Switch,
    Hub,
    Wlan,
    Emane,
}

impl NodeCategory {
    /// Numeric node type used on the daemon's wire protocol.
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Switch => 4,
            Self::Hub => 5,
            Self::Wlan => 6,
            Self::Emane => 10,
        }
    }
}

/// A node type available to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeType {
    pub category: NodeCategory,
    pub model: String,
    pub display: String,
    pub icon: String,
    pub services: Vec<String>,
}

impl NodeType {
    /// Build a `Default`-category record from a persisted template.
    pub fn from_config(config: &NodeTypeConfig) -> Self {
        Self {
            category: NodeCategory::Default,
            model: config.model.clone(),
            display: config.display.clone(),
            icon: config.icon.clone(),
            services: config.services.clone(),
        }
    }
}

/// Append-only collection of node types, in insertion order.
///
/// Model identifiers are expected to be unique but duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
    types: Vec<NodeType>,
}

impl NodeTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node_type: NodeType) {
        tracing::trace!(
            category = %node_type.category,
            model = %node_type.model,
            "registered node type"
        );
        self.types.push(node_type);
    }

    pub fn install(&mut self, node_types: impl IntoIterator<Item = NodeType>) {
        for node_type in node_types {
            self.add(node_type);
        }
    }

    /// First registered type with the given category and model.
    pub fn get(&self, category: NodeCategory, model: &str) -> Option<&NodeType> {
        self.types
            .iter()
            .find(|t| t.category == category && t.model == model)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a NodeTypeRegistry {
    type Item = &'a NodeType;
    type IntoIter = std::slice::Iter<'a, NodeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use super::*;

    fn host() -> NodeType {
        NodeType::from_config(&NodeTypeConfig::new(
            "host",
            "Host",
            "file:///icons/host-100.png",
            ["DefaultRoute", "SSH"],
        ))
    }

    #[test]
    fn test_from_config_is_default_category() {
        let node_type = host();
        assert_eq!(node_type.category, NodeCategory::Default);
        assert_eq!(node_type.model, "host");
        assert_eq!(node_type.services, ["DefaultRoute", "SSH"]);
    }

    #[test]
    fn test_category_display_and_parse() {
        assert_eq!(NodeCategory::Default.to_string(), "DEFAULT");
        assert_eq!(NodeCategory::from_str("EMANE").unwrap(), NodeCategory::Emane);
        assert_eq!(NodeCategory::Wlan.code(), 6);
    }

    #[test]
    fn test_registry_keeps_insertion_order_and_duplicates() {
        let mut registry = NodeTypeRegistry::new();
        let mut pc = host();
        pc.model = "PC".into();

        registry.install([host(), pc, host()]);

        let models: Vec<_> = registry.iter().map(|t| t.model.as_str()).collect();
        assert_eq!(models, ["host", "PC", "host"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_lookup_by_category_and_model() {
        let mut registry = NodeTypeRegistry::new();
        registry.add(host());

        assert!(registry.get(NodeCategory::Default, "host").is_some());
        assert!(registry.get(NodeCategory::Emane, "host").is_none());
        assert!(registry.get(NodeCategory::Default, "mdr").is_none());
    }
}
