//! Serialization backend surface.
//!
//! The driver hands each generated type to a [`SourceBackend`] together
//! with a [`Dependencies`] descriptor tying the output to the originating
//! source file, so the host's incremental build can invalidate and
//! regenerate correctly.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Dependency descriptor for one generated file.
///
/// Invalidation is coarse-grained: the output depends on whole source
/// files, not individual symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependencies {
    /// Whether the output aggregates over the whole file graph (it does:
    /// any change to a candidate's file regenerates its proxy).
    pub aggregating: bool,
    /// Source files the output depends on.
    pub sources: Vec<PathBuf>,
}

impl Dependencies {
    /// An aggregating descriptor over the given sources.
    pub fn aggregating(sources: Vec<PathBuf>) -> Self {
        Self {
            aggregating: true,
            sources,
        }
    }
}

/// One rendered proxy source, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Target package (same as the original declaration's).
    pub package: String,
    /// File name (`<TypeName>.kt`).
    pub file_name: String,
    /// Rendered Kotlin source text.
    pub content: String,
    /// Invalidation descriptor for the host's incremental build.
    pub dependencies: Dependencies,
}

impl GeneratedSource {
    /// The output path relative to a source root: package directories plus
    /// the file name.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').collect();
        path.push(&self.file_name);
        path
    }
}

/// Persists generated sources.
///
/// Implementations decide where and how files land; the driver only
/// produces [`GeneratedSource`] values.
pub trait SourceBackend {
    /// Persist one generated source.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; this fails the whole pass
    /// (unlike per-candidate generation errors, which become diagnostics).
    fn write(&mut self, source: GeneratedSource) -> Result<()>;
}

/// Backend that writes generated sources under a base directory, laying
/// packages out as directories.
#[derive(Debug, Clone)]
pub struct FsBackend {
    base: PathBuf,
}

impl FsBackend {
    /// Create a backend rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The absolute path a source would be written to.
    pub fn path_for(&self, source: &GeneratedSource) -> PathBuf {
        self.base.join(source.relative_path())
    }
}

impl SourceBackend for FsBackend {
    fn write(&mut self, source: GeneratedSource) -> Result<()> {
        let path = self.path_for(&source);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &source.content)?;
        Ok(())
    }
}

/// Backend that collects generated sources in memory, for tests and
/// previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    sources: Vec<GeneratedSource>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sources written so far, in write order.
    pub fn sources(&self) -> &[GeneratedSource] {
        &self.sources
    }

    /// Find a written source by file name.
    pub fn find(&self, file_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.file_name == file_name)
    }
}

impl SourceBackend for MemoryBackend {
    fn write(&mut self, source: GeneratedSource) -> Result<()> {
        self.sources.push(source);
        Ok(())
    }
}
