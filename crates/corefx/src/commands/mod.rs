//! Command dispatch: builds the bootstrap from global flags and routes to
//! the per-command handlers.

pub mod node_types;
pub mod paths;
pub mod save;
pub mod show;

use corefx_config::{Bootstrap, DirBundle, EmbeddedBundle, HomeLayout, Invocation, Loaded};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let layout = HomeLayout::discover()?;
    tracing::debug!(command = ?cmd, home = %layout.home().display(), "dispatching command");

    match cmd {
        // Inspecting the layout must not create it.
        Command::Paths => paths::handle(&layout, global),
        Command::Show => show::handle(&bootstrap(layout, global), global),
        Command::NodeTypes => node_types::handle(&bootstrap(layout, global), global),
        Command::Save => save::handle(&bootstrap(layout, global), global),
    }
}

fn bootstrap(layout: HomeLayout, global: &GlobalOpts) -> Bootstrap {
    match &global.resources {
        Some(dir) => Bootstrap::new(layout, DirBundle::new(dir)),
        None => Bootstrap::new(layout, EmbeddedBundle),
    }
}

/// Run the bootstrap with the invocation-time overrides from `global`.
pub(crate) fn load(bootstrap: &Bootstrap, global: &GlobalOpts) -> Result<Loaded, CliError> {
    let invocation = Invocation {
        core_rest: global.core_rest.clone(),
    };
    bootstrap
        .load(&invocation)
        .map_err(|source| CliError::Unavailable {
            home: bootstrap.layout().home().display().to_string(),
            source,
        })
}
