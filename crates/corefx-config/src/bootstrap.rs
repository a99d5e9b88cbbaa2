//! First-run vs. normal-run bootstrap of the CORE home directory.
//!
//! The state is observed from the filesystem on every call, never
//! persisted:
//!
//! - [`HomeState::Missing`]: `~/.core/` does not exist.
//! - [`HomeState::HomeOnly`]: `~/.core/` exists but `config.json` does not.
//! - [`HomeState::Ready`]: both exist.
//!
//! `Missing` and `HomeOnly` both seed the home from the bundle. `Ready`
//! reads `config.json` and recreates any configured directory that has
//! since been removed. Either way the node types are derived with
//! sorted services and the invocation's `core-rest` override is applied
//! last, without being written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::codec;
use crate::defaults::build_defaults;
use crate::error::{ConfigError, ConfigurationUnavailable};
use crate::model::Configuration;
use crate::node_type::{NodeType, NodeTypeRegistry};
use crate::paths::HomeLayout;
use crate::resource::{DEFAULT_CONFIG_RESOURCE, ResourceBundle, extract};

/// Name of the invocation property carrying the REST endpoint override.
pub const CORE_REST_PROPERTY: &str = "core-rest";

/// Overrides supplied when the application was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Value of the `core-rest` property. `None` clears any persisted value.
    pub core_rest: Option<String>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_core_rest(mut self, url: impl Into<String>) -> Self {
        self.core_rest = Some(url.into());
        self
    }
}

/// What the filesystem says about the home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeState {
    Missing,
    HomeOnly,
    Ready,
}

impl HomeState {
    pub fn observe(layout: &HomeLayout) -> Self {
        let home = layout.home().is_dir();
        let config = layout.config_file().exists();
        match (home, config) {
            (true, true) => Self::Ready,
            (true, false) => Self::HomeOnly,
            (false, _) => Self::Missing,
        }
    }

    pub fn is_first_run(self) -> bool {
        !matches!(self, Self::Ready)
    }
}

/// Result of a successful bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub configuration: Configuration,
    /// One `Default`-category record per node-type config, same order.
    pub node_types: Vec<NodeType>,
}

impl Loaded {
    /// Hand the node types to `registry` and keep the configuration.
    pub fn install(self, registry: &mut NodeTypeRegistry) -> Configuration {
        registry.install(self.node_types);
        self.configuration
    }
}

/// Bootstraps and persists the configuration for one home layout.
pub struct Bootstrap {
    layout: HomeLayout,
    bundle: Box<dyn ResourceBundle>,
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Bootstrap {
    pub fn new(layout: HomeLayout, bundle: impl ResourceBundle + 'static) -> Self {
        Self {
            layout,
            bundle: Box::new(bundle),
        }
    }

    pub fn layout(&self) -> &HomeLayout {
        &self.layout
    }

    /// Ensure the home exists, load the configuration, and derive node types.
    ///
    /// Every failure is logged and surfaced as [`ConfigurationUnavailable`].
    /// Nothing is rolled back: a half-created home stays on disk.
    pub fn load(&self, invocation: &Invocation) -> Result<Loaded, ConfigurationUnavailable> {
        self.try_load(invocation).map_err(|err| {
            error!(
                error = %err,
                home = %self.layout.home().display(),
                "configuration unavailable"
            );
            ConfigurationUnavailable::from(err)
        })
    }

    /// Write `configuration` to the config file.
    pub fn save(&self, configuration: &Configuration) -> Result<(), ConfigError> {
        let path = self.layout.config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;
        }
        codec::write(path, configuration)?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    fn try_load(&self, invocation: &Invocation) -> Result<Loaded, ConfigError> {
        let state = HomeState::observe(&self.layout);
        debug!(?state, home = %self.layout.home().display(), "observed core home");

        let mut configuration = if state.is_first_run() {
            self.seed(state)?
        } else {
            let configuration = codec::read(self.layout.config_file())?;
            ensure_directories(&configuration)?;
            audit(&configuration);
            configuration
        };

        let node_types = configuration
            .node_type_configs
            .iter_mut()
            .map(|config| {
                config.sort_services();
                NodeType::from_config(config)
            })
            .collect();

        configuration.core_rest.clone_from(&invocation.core_rest);

        Ok(Loaded {
            configuration,
            node_types,
        })
    }

    /// First run: create the layout, seed `config.json`, extract defaults.
    fn seed(&self, state: HomeState) -> Result<Configuration, ConfigError> {
        if state == HomeState::Missing {
            info!("creating core home directory");
        }
        for dir in self.layout.directories() {
            fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;
        }

        info!("creating default configuration");
        let config_file = self.layout.config_file();
        extract(&*self.bundle, DEFAULT_CONFIG_RESOURCE, config_file)?;

        let mut configuration = codec::read(config_file)?;
        configuration.xml_path = self.layout.xml_dir().to_path_buf();
        configuration.mobility_path = self.layout.mobility_dir().to_path_buf();
        configuration.icon_path = self.layout.icon_dir().to_path_buf();
        configuration.core_rest = None;
        configuration.node_type_configs = build_defaults(&*self.bundle, self.layout.icon_dir())?;

        codec::write(config_file, &configuration)?;
        Ok(configuration)
    }
}

fn configured_dirs(configuration: &Configuration) -> [(&'static str, &Path); 3] {
    [
        ("xmlPath", configuration.xml_path.as_path()),
        ("mobilityPath", configuration.mobility_path.as_path()),
        ("iconPath", configuration.icon_path.as_path()),
    ]
}

/// Recreate configured directories removed since the first run.
///
/// An empty path means the first run never got as far as recording the
/// layout, so there is nothing sensible to create.
fn ensure_directories(configuration: &Configuration) -> Result<(), ConfigError> {
    for (field, dir) in configured_dirs(configuration) {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::UnsetPath { field });
        }
        if !dir.is_dir() {
            warn!(field, path = %dir.display(), "configured directory missing, recreating");
            fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;
        }
    }
    Ok(())
}

/// Report (but tolerate) icons and models that no longer line up.
fn audit(configuration: &Configuration) {
    let mut models = HashSet::new();
    for config in &configuration.node_type_configs {
        if !models.insert(config.model.as_str()) {
            warn!(model = %config.model, "duplicate node type model");
        }
        if !icon_exists(&config.icon) {
            warn!(model = %config.model, icon = %config.icon, "node type icon not found");
        }
    }
}

fn icon_exists(uri: &str) -> bool {
    Url::parse(uri)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .is_some_and(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::resource::{EmbeddedBundle, MemoryBundle};

    #[test]
    fn test_observe_missing_home() {
        let dir = tempfile::tempdir().unwrap();
        let layout = HomeLayout::under(dir.path());
        assert_eq!(HomeState::observe(&layout), HomeState::Missing);
        assert!(HomeState::Missing.is_first_run());
    }

    #[test]
    fn test_observe_home_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let layout = HomeLayout::under(dir.path());
        fs::create_dir(layout.home()).unwrap();
        assert_eq!(HomeState::observe(&layout), HomeState::HomeOnly);
        assert!(HomeState::HomeOnly.is_first_run());
    }

    #[test]
    fn test_observe_ready() {
        let dir = tempfile::tempdir().unwrap();
        let layout = HomeLayout::under(dir.path());
        fs::create_dir(layout.home()).unwrap();
        fs::write(layout.config_file(), "{}").unwrap();
        assert_eq!(HomeState::observe(&layout), HomeState::Ready);
        assert!(!HomeState::Ready.is_first_run());
    }

    #[test]
    fn test_seed_clears_core_rest_from_seed_document() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = EmbeddedBundle
            .entries()
            .collect::<MemoryBundle>()
            .with(DEFAULT_CONFIG_RESOURCE, br#"{"coreRest":"http://seed:1"}"#.to_vec());
        let bootstrap = Bootstrap::new(HomeLayout::under(dir.path()), bundle);

        let loaded = bootstrap.load(&Invocation::new()).unwrap();
        let persisted = codec::read(bootstrap.layout().config_file()).unwrap();

        assert_eq!(loaded.configuration.core_rest, None);
        assert_eq!(persisted.core_rest, None);
    }

    #[test]
    fn test_ready_config_without_paths_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let layout = HomeLayout::under(dir.path());
        fs::create_dir(layout.home()).unwrap();
        fs::write(layout.config_file(), "{}").unwrap();
        let bootstrap = Bootstrap::new(layout, EmbeddedBundle);

        let err = bootstrap.load(&Invocation::new()).unwrap_err();

        assert!(
            matches!(err.cause(), ConfigError::UnsetPath { field: "xmlPath" }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_icon_exists_rejects_non_file_uris() {
        assert!(!icon_exists("http://example.com/x.png"));
        assert!(!icon_exists("not a uri"));
    }

    #[test]
    fn test_debug_omits_bundle() {
        let bootstrap = Bootstrap::new(HomeLayout::under("/u"), EmbeddedBundle);
        assert!(format!("{bootstrap:?}").starts_with("Bootstrap { layout"));
    }
}
