//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use corefx_config::{ConfigError, ConfigurationUnavailable};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const CONFIG: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Configuration unavailable")]
    #[diagnostic(
        code(corefx::unavailable),
        help(
            "Partial state is left in {home} for inspection.\n\
             If the first run failed, delete config.json and icons/ there \
             to re-seed the defaults."
        )
    )]
    Unavailable {
        home: String,
        #[source]
        source: ConfigurationUnavailable,
    },

    #[error("Could not save configuration to {path}")]
    #[diagnostic(code(corefx::save))]
    Save {
        path: String,
        #[source]
        source: ConfigError,
    },

    #[error(transparent)]
    #[diagnostic(code(corefx::config))]
    Config(#[from] ConfigError),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(corefx::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unavailable { .. } => exit_code::CONFIG,
            Self::Save { .. } | Self::Config(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}
