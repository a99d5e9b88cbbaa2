//! `corefx save`: load, then persist what was loaded.
//!
//! Unlike a plain load this writes the `--core-rest` override and the
//! sorted service lists back to `config.json`.

use corefx_config::Bootstrap;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub fn handle(bootstrap: &Bootstrap, global: &GlobalOpts) -> Result<(), CliError> {
    let configuration = super::load(bootstrap, global)?.configuration;
    let path = bootstrap.layout().config_file();

    bootstrap
        .save(&configuration)
        .map_err(|source| CliError::Save {
            path: path.display().to_string(),
            source,
        })?;

    if !global.quiet {
        eprintln!("Saved configuration to {}", path.display());
    }
    Ok(())
}
