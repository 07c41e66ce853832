//! Read-only asset sources.

use crate::loader::{LoadError, LoadResult};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read-only, name-addressed asset store.
pub trait AssetSource: Send + Sync {
    /// Returns the full contents of asset `name`.
    ///
    /// # Errors
    /// - `LoadError::AssetMissing` when no asset has that name.
    /// - `LoadError::Io` for any other read failure.
    fn read(&self, name: &str) -> LoadResult<Vec<u8>>;
}

/// Assets stored as files under one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }
}

impl AssetSource for DirAssetSource {
    fn read(&self, name: &str) -> LoadResult<Vec<u8>> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LoadError::AssetMissing(path.display().to_string()),
            _ => LoadError::Io(err),
        })
    }
}

/// In-memory assets, used by tests and embedders that bundle the document.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.assets.insert(name.into(), bytes);
    }
}

impl AssetSource for MemoryAssetSource {
    fn read(&self, name: &str) -> LoadResult<Vec<u8>> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::AssetMissing(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetSource, DirAssetSource};
    use crate::loader::LoadError;

    #[test]
    fn dir_source_reads_files_and_reports_missing() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        std::fs::write(dir.path().join("profile.json"), b"{}").expect("write asset");
        let source = DirAssetSource::new(dir.path());

        assert_eq!(source.read("profile.json").expect("asset exists"), b"{}");
        let err = source.read("absent.json").expect_err("missing asset must fail");
        assert!(matches!(err, LoadError::AssetMissing(_)));
    }
}
