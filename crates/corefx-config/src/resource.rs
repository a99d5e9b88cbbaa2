// ── Packaged resources ──
//
// A `ResourceBundle` maps absolute logical names (`/config.json`,
// `/icons/host-100.png`) to byte streams. Production code uses the
// `EmbeddedBundle` compiled into the binary; tests hand in a
// `MemoryBundle`; operators may point at an unpacked `DirBundle`.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;

/// Logical name of the seed configuration document.
pub const DEFAULT_CONFIG_RESOURCE: &str = "/config.json";

/// Read-only source of named assets.
pub trait ResourceBundle {
    /// Open the entry called `name`, or `Ok(None)` if the bundle has no
    /// such entry.
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>>;
}

impl<T: ResourceBundle + ?Sized> ResourceBundle for Box<T> {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        (**self).open(name)
    }
}

// ── Embedded ─────────────────────────────────────────────────────────

const EMBEDDED: &[(&str, &[u8])] = &[
    (DEFAULT_CONFIG_RESOURCE, include_bytes!("../assets/config.json")),
    ("/icons/host-100.png", include_bytes!("../assets/icons/host-100.png")),
    ("/icons/pc-100.png", include_bytes!("../assets/icons/pc-100.png")),
    ("/icons/router-100.png", include_bytes!("../assets/icons/router-100.png")),
];

/// The default resources shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundle;

impl EmbeddedBundle {
    /// All embedded entries as `(name, bytes)` pairs.
    pub fn entries(self) -> impl Iterator<Item = (&'static str, &'static [u8])> {
        EMBEDDED.iter().copied()
    }
}

impl ResourceBundle for EmbeddedBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(EMBEDDED
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|&(_, bytes)| Box::new(bytes) as Box<dyn Read>))
    }
}

// ── In-memory ────────────────────────────────────────────────────────

/// A bundle backed by an owned map, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.entries.remove(name)
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for MemoryBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (name, bytes) in iter {
            bundle.insert(name, bytes);
        }
        bundle
    }
}

impl ResourceBundle for MemoryBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .entries
            .get(name)
            .map(|bytes| Box::new(bytes.as_slice()) as Box<dyn Read + '_>))
    }
}

// ── Directory ────────────────────────────────────────────────────────

/// A bundle read from an unpacked resource directory.
///
/// `/icons/host-100.png` resolves to `<root>/icons/host-100.png`. Names that
/// try to leave the root are reported as absent.
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name.trim_start_matches('/'));
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        (contained && !relative.as_os_str().is_empty()).then(|| self.root.join(relative))
    }
}

impl ResourceBundle for DirBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        let Some(path) = self.resolve(name) else {
            return Ok(None);
        };
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// ── Extraction ───────────────────────────────────────────────────────

/// Copy bundle entry `name` to `destination`, byte for byte.
///
/// The destination is created exclusively: an existing file is never
/// overwritten and yields [`ConfigError::AlreadyExists`]. The bundle is
/// consulted before anything is created, so a missing entry leaves no file
/// behind. Returns the number of bytes written.
pub fn extract(
    bundle: &dyn ResourceBundle,
    name: &str,
    destination: &Path,
) -> Result<u64, ConfigError> {
    let mut reader = bundle
        .open(name)
        .map_err(|source| ConfigError::ResourceRead {
            name: name.to_owned(),
            source,
        })?
        .ok_or_else(|| ConfigError::ResourceMissing {
            name: name.to_owned(),
        })?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                ConfigError::AlreadyExists {
                    path: destination.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: destination.to_path_buf(),
                    source,
                }
            }
        })?;

    let written = copy(&mut reader, &mut file, name, destination)?;
    tracing::debug!(
        resource = name,
        path = %destination.display(),
        bytes = written,
        "extracted resource"
    );
    Ok(written)
}

/// `io::copy` with read failures attributed to the bundle and write
/// failures attributed to the destination.
fn copy(
    reader: &mut dyn Read,
    file: &mut File,
    name: &str,
    destination: &Path,
) -> Result<u64, ConfigError> {
    let mut buf = [0u8; 8192];
    let mut written = 0usize;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ConfigError::ResourceRead {
                    name: name.to_owned(),
                    source,
                });
            }
        };
        file.write_all(&buf[..n]).map_err(ConfigError::io(destination))?;
        written += n;
    }
    file.flush().map_err(ConfigError::io(destination))?;
    Ok(u64::try_from(written).unwrap_or(u64::MAX))
}
