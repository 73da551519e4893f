//! Path helpers for the engine directory layout

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory holding project templates
pub fn templates_dir(root: &Path) -> PathBuf {
    root.join("templates")
}

/// Directory where generated projects live
pub fn projects_dir(root: &Path) -> PathBuf {
    root.join("projects")
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
