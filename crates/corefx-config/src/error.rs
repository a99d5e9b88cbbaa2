// ── Configuration error types ──
//
// `ConfigError` carries the individual failure kinds raised by the paths,
// resource, codec, and defaults modules. The bootstrap boundary collapses
// all of them into `ConfigurationUnavailable`, keeping the cause as its
// `source` so callers can still render the full chain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds raised while locating, seeding, reading, or writing the
/// configuration home.
#[derive(Debug, Error)]
pub enum ConfigError {
    // ── Environment ──────────────────────────────────────────────────
    #[error("could not determine the current user's home directory")]
    NoHomeDirectory,

    // ── Bundled resources ────────────────────────────────────────────
    #[error("bundled resource '{name}' not found")]
    ResourceMissing { name: String },

    #[error("failed to read bundled resource '{name}': {source}")]
    ResourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("refusing to overwrite existing file {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("cannot express {} as a file URI", .path.display())]
    IconUri { path: PathBuf },

    // ── Filesystem ───────────────────────────────────────────────────
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration field '{field}' has no directory set")]
    UnsetPath { field: &'static str },

    // ── Serialization ────────────────────────────────────────────────
    #[error("malformed configuration in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ConfigError {
    /// Wrap an `io::Error` with the path it occurred at.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// The single fatal condition surfaced by bootstrap.
///
/// Whatever went wrong underneath is available through
/// [`cause`](Self::cause) and the standard `source()` chain. Partial state
/// on disk is left in place for inspection.
#[derive(Debug, Error)]
#[error("configuration unavailable: {source}")]
pub struct ConfigurationUnavailable {
    #[from]
    source: ConfigError,
}

impl ConfigurationUnavailable {
    pub fn cause(&self) -> &ConfigError {
        &self.source
    }

    pub fn into_cause(self) -> ConfigError {
        self.source
    }
}
