//! Project scaffolding: template instantiation and skeleton overlays
//!
//! A new project is seeded from a template tree, then each requested
//! platform contributes a skeleton tree copied into the project's `build`
//! directory with the project-name token substituted in file contents and
//! file names.

pub mod copy;
pub mod substitute;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::{paths, terminal};

/// Copy the template tree to the project path
pub fn instantiate_template(template: &Path, project: &Path) -> Result<()> {
    copy::copy_tree(template, project)
        .with_context(|| format!("Failed to copy template {}", template.display()))
}

/// Resolve the skeleton source directory for a platform
pub fn skeleton_source(root: &Path, platform: &str) -> PathBuf {
    if platform == "apple" {
        // Apple uses the client runtime skeleton
        root.join("runtime").join("client").join("skeleton")
    } else {
        root.join("platforms").join(platform).join("skeleton")
    }
}

/// Overlay one platform skeleton into the project's build directory
///
/// A missing skeleton source is a note, not an error: the platform is
/// skipped and generation continues.
pub fn generate_skeleton(
    root: &Path,
    project: &Path,
    platform: &str,
    project_name: &str,
    verbose: bool,
) -> Result<()> {
    eprintln!("Generating {} skeleton...", platform);

    let source = skeleton_source(root, platform);
    if !source.exists() {
        terminal::print_warning(&format!(
            "No skeleton source found for {} at {}",
            platform,
            source.display()
        ));
        return Ok(());
    }

    let build_dir = project.join("build");
    paths::ensure_dir(&build_dir)?;

    let dest = build_dir.join(platform);
    copy::copy_tree(&source, &dest)
        .with_context(|| format!("Failed to copy {} skeleton", platform))?;

    substitute::apply_tree(&dest, project_name, verbose);

    Ok(())
}
