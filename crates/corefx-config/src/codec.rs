//! JSON persistence for [`Configuration`].

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::Configuration;

/// Decode the configuration document at `path`.
///
/// # Errors
///
/// [`ConfigError::Io`] if the file is missing or unreadable,
/// [`ConfigError::Decode`] if its contents do not match the schema.
pub fn read(path: &Path) -> Result<Configuration, ConfigError> {
    let bytes = fs::read(path).map_err(ConfigError::io(path))?;
    serde_json::from_slice(&bytes).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode `configuration` as indented JSON and replace the file at `path`.
///
/// # Errors
///
/// [`ConfigError::Encode`] if a path is not valid UTF-8,
/// [`ConfigError::Io`] if the file cannot be written.
pub fn write(path: &Path, configuration: &Configuration) -> Result<(), ConfigError> {
    let mut document = serde_json::to_string_pretty(configuration).map_err(ConfigError::Encode)?;
    document.push('\n');
    fs::write(path, document).map_err(ConfigError::io(path))
}
