//! On-disk layout of the CORE home directory.
//!
//! Everything lives under `<user-home>/.core/`:
//!
//! ```text
//! ~/.core/
//! ├── config.json
//! ├── xml/
//! ├── mobility/
//! └── icons/
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ConfigError;

pub const HOME_DIR_NAME: &str = ".core";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const XML_DIR_NAME: &str = "xml";
pub const MOBILITY_DIR_NAME: &str = "mobility";
pub const ICON_DIR_NAME: &str = "icons";

/// The five well-known paths of the application home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    home: PathBuf,
    config_file: PathBuf,
    xml_dir: PathBuf,
    mobility_dir: PathBuf,
    icon_dir: PathBuf,
}

impl HomeLayout {
    /// Derive the layout rooted at `user_home`. Performs no I/O.
    pub fn under(user_home: impl AsRef<Path>) -> Self {
        let home = user_home.as_ref().join(HOME_DIR_NAME);
        Self {
            config_file: home.join(CONFIG_FILE_NAME),
            xml_dir: home.join(XML_DIR_NAME),
            mobility_dir: home.join(MOBILITY_DIR_NAME),
            icon_dir: home.join(ICON_DIR_NAME),
            home,
        }
    }

    /// Derive the layout under the current user's home directory.
    pub fn discover() -> Result<Self, ConfigError> {
        let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
        let layout = Self::under(dirs.home_dir());
        tracing::debug!(home = %layout.home.display(), "resolved core home");
        Ok(layout)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn xml_dir(&self) -> &Path {
        &self.xml_dir
    }

    pub fn mobility_dir(&self) -> &Path {
        &self.mobility_dir
    }

    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }

    /// The four directories in creation order, parent first.
    pub fn directories(&self) -> [&Path; 4] {
        [&self.home, &self.xml_dir, &self.mobility_dir, &self.icon_dir]
    }
}
