//! Manifest store for loading and saving ups.toml.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{ManifestConfig, parser, paths};

#[derive(Debug, Clone)]
pub struct ManifestStore {
    manifest_path: PathBuf,
}

impl ManifestStore {
    pub fn from_path(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    /// Locate the manifest from an optional explicit path and the current directory.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::from_path(path));
        }
        let project_root = std::env::current_dir()?;
        Self::discover_in(&project_root, paths::global_config_dir)
    }

    /// Prefer `ups.toml` under `project_root`; `global_dir` is only consulted
    /// when the project has none.
    pub fn discover_in(
        project_root: &Path,
        global_dir: impl FnOnce() -> anyhow::Result<PathBuf>,
    ) -> anyhow::Result<Self> {
        if let Some(path) = paths::project_manifest_path(project_root) {
            return Ok(Self::from_path(path));
        }
        let global_dir = global_dir().context("No ups.toml in the current directory")?;
        Ok(Self::from_path(global_dir.join(paths::MANIFEST_FILE_NAME)))
    }

    pub fn from_paths(explicit: Option<&Path>, project_root: &Path, global_dir: &Path) -> Self {
        Self::from_path(paths::resolve_manifest_path(
            explicit,
            project_root,
            global_dir,
        ))
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn load(&self) -> anyhow::Result<ManifestConfig> {
        if !self.manifest_path.exists() {
            anyhow::bail!(
                "Manifest not found: {}",
                self.manifest_path.display()
            );
        }
        tracing::debug!(path = %self.manifest_path.display(), "Loading manifest");
        parser::parse_manifest(&self.manifest_path)
    }

    /// Write `config` to the manifest path, creating parent directories.
    pub fn save(&self, config: &ManifestConfig) -> anyhow::Result<()> {
        let content = parser::to_toml(config)?;
        let path = &self.manifest_path;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create directory for {}", path.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Could not write manifest to {}", path.display()))
    }
}
