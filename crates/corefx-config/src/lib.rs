//! Configuration bootstrap for the CORE desktop client.
//!
//! On first launch the per-user home `~/.core/` is created and seeded from
//! resources packaged with the application; afterwards the persisted
//! `config.json` is read back. Either way the caller receives the
//! configuration together with the node types it defines:
//!
//! - **[`HomeLayout`]**: the well-known paths under `~/.core/`.
//! - **[`ResourceBundle`]**: named packaged assets ([`EmbeddedBundle`],
//!   [`MemoryBundle`], [`DirBundle`]) and [`extract`], which copies one to
//!   disk without ever overwriting.
//! - **[`codec`]**: `config.json` encoding.
//! - **[`defaults`]**: the built-in `host`, `PC`, and `mdr` node types.
//! - **[`Bootstrap`]**: the first-run / normal-run state machine.
//!
//! ```no_run
//! use corefx_config::{Invocation, NodeTypeRegistry};
//!
//! let invocation = Invocation::new().with_core_rest("http://localhost:8000");
//! let mut registry = NodeTypeRegistry::new();
//! let configuration = corefx_config::load(&invocation)?.install(&mut registry);
//! assert_eq!(registry.len(), configuration.node_type_configs.len());
//! # Ok::<(), corefx_config::ConfigurationUnavailable>(())
//! ```

pub mod bootstrap;
pub mod codec;
pub mod defaults;
pub mod error;
pub mod model;
pub mod node_type;
pub mod paths;
pub mod resource;

pub use bootstrap::{Bootstrap, CORE_REST_PROPERTY, HomeState, Invocation, Loaded};
pub use defaults::{BUILTIN_NODE_TYPES, BuiltinNodeType, build_defaults};
pub use error::{ConfigError, ConfigurationUnavailable};
pub use model::{Configuration, NodeTypeConfig};
pub use node_type::{NodeCategory, NodeType, NodeTypeRegistry};
pub use paths::HomeLayout;
pub use resource::{
    DEFAULT_CONFIG_RESOURCE, DirBundle, EmbeddedBundle, MemoryBundle, ResourceBundle, extract,
};

/// Bootstrap `~/.core/` for the current user from the embedded resources.
pub fn load(invocation: &Invocation) -> Result<Loaded, ConfigurationUnavailable> {
    let layout = HomeLayout::discover().map_err(|err| {
        tracing::error!(error = %err, "configuration unavailable");
        ConfigurationUnavailable::from(err)
    })?;
    Bootstrap::new(layout, EmbeddedBundle).load(invocation)
}

/// Persist `configuration` to `~/.core/config.json` for the current user.
pub fn save(configuration: &Configuration) -> Result<(), ConfigError> {
    Bootstrap::new(HomeLayout::discover()?, EmbeddedBundle).save(configuration)
}
