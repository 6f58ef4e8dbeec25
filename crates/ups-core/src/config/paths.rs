//! Manifest path resolution helpers.

use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "ups.toml";

/// Resolve which manifest to use.
///
/// An explicit path always wins. Otherwise `ups.toml` in the project root is
/// used if present, falling back to the global config directory.
pub fn resolve_manifest_path(
    explicit: Option<&Path>,
    project_root: &Path,
    global_dir: &Path,
) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| project_manifest_path(project_root))
        .unwrap_or_else(|| global_dir.join(MANIFEST_FILE_NAME))
}

/// `ups.toml` under `project_root`, if the file exists.
pub fn project_manifest_path(project_root: &Path) -> Option<PathBuf> {
    let project = project_root.join(MANIFEST_FILE_NAME);
    project.exists().then_some(project)
}

/// `<config_dir>/ups-manager`
pub fn global_config_dir() -> anyhow::Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("ups-manager"))
}
