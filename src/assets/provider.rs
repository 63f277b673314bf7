use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{CardError, CardResult};

/// Kind of asset a renderer asks for. Each kind lives in its own directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetKind {
    /// Background templates (`assets/templates`).
    Template,
    /// Team logos keyed by slug plus extension (`assets/logos`).
    Logo,
    /// Font files (`assets/fonts`).
    Font,
}

/// Source of raw asset bytes.
///
/// `Ok(None)` means the asset does not exist, which renderers treat as "use the fallback".
/// `Err` is reserved for assets that exist but cannot be read.
pub trait AssetProvider {
    /// Read the bytes of `name` (a relative path) of the given kind.
    fn read(&self, kind: AssetKind, name: &str) -> CardResult<Option<Vec<u8>>>;
}

/// Directory layout rooted at a base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPaths {
    /// Root holding `assets/` and `output/`.
    pub base_dir: PathBuf,
}

impl RenderPaths {
    /// Paths rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// `<base>/assets/templates`.
    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join("assets").join("templates")
    }

    /// `<base>/assets/logos`.
    pub fn logos_dir(&self) -> PathBuf {
        self.base_dir.join("assets").join("logos")
    }

    /// `<base>/assets/fonts`.
    pub fn fonts_dir(&self) -> PathBuf {
        self.base_dir.join("assets").join("fonts")
    }

    /// `<base>/output`.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("output")
    }

    /// Directory assets of `kind` are read from.
    pub fn dir_for(&self, kind: AssetKind) -> PathBuf {
        match kind {
            AssetKind::Template => self.templates_dir(),
            AssetKind::Logo => self.logos_dir(),
            AssetKind::Font => self.fonts_dir(),
        }
    }
}

/// [`AssetProvider`] reading from the directories of a [`RenderPaths`].
#[derive(Clone, Debug)]
pub struct DirAssets {
    paths: RenderPaths,
}

impl DirAssets {
    /// Provider over `paths`.
    pub fn new(paths: RenderPaths) -> Self {
        Self { paths }
    }

    /// The underlying paths.
    pub fn paths(&self) -> &RenderPaths {
        &self.paths
    }
}

impl AssetProvider for DirAssets {
    fn read(&self, kind: AssetKind, name: &str) -> CardResult<Option<Vec<u8>>> {
        let norm = normalize_rel_path(name)?;
        let p = self.paths.dir_for(kind).join(Path::new(&norm));
        match std::fs::read(&p) {
            Ok(bytes) => {
                tracing::debug!(path = %p.display(), len = bytes.len(), "asset read");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %p.display(), "asset not found");
                Ok(None)
            }
            Err(e) => Err(CardError::asset(format!(
                "failed to read asset '{}': {e}",
                p.display()
            ))),
        }
    }
}

/// In-memory [`AssetProvider`] for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAssets {
    entries: BTreeMap<(AssetKind, String), Vec<u8>>,
}

impl InMemoryAssets {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` under `name`, replacing any previous entry.
    pub fn insert(&mut self, kind: AssetKind, name: &str, bytes: Vec<u8>) -> CardResult<()> {
        let norm = normalize_rel_path(name)?;
        self.entries.insert((kind, norm), bytes);
        Ok(())
    }

    /// Builder-style [`InMemoryAssets::insert`].
    pub fn with(mut self, kind: AssetKind, name: &str, bytes: Vec<u8>) -> CardResult<Self> {
        self.insert(kind, name, bytes)?;
        Ok(self)
    }
}

impl AssetProvider for InMemoryAssets {
    fn read(&self, kind: AssetKind, name: &str) -> CardResult<Option<Vec<u8>>> {
        let norm = normalize_rel_path(name)?;
        Ok(self.entries.get(&(kind, norm)).cloned())
    }
}

/// Normalize and validate asset names.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardError::validation("asset names must be relative"));
    }
    if s.is_empty() {
        return Err(CardError::validation("asset name must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset names must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardError::validation("asset name must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/provider.rs"]
mod tests;
