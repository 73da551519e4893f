//! Placeholder substitution over a copied skeleton tree

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Token replaced by the project name in file contents and file names
pub const PROJECT_NAME_TOKEN: &str = "{{PROJECT_NAME}}";

/// Replace the project-name token across every file under `tree`
///
/// Files that cannot be read as UTF-8 or written back are left untouched;
/// the pass never fails because of a single file.
pub fn apply_tree(tree: &Path, project_name: &str, verbose: bool) {
    for entry in WalkDir::new(tree) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }

        if let Err(e) = apply_file(entry.path(), project_name) {
            if verbose {
                eprintln!("  skipping {}: {}", entry.path().display(), e);
            }
        }
    }
}

/// Substitute the token in one file's contents, then in its name
fn apply_file(path: &Path, project_name: &str) -> std::io::Result<()> {
    let content = fs::read_to_string(path)?;
    if content.contains(PROJECT_NAME_TOKEN) {
        fs::write(path, content.replace(PROJECT_NAME_TOKEN, project_name))?;
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.contains(PROJECT_NAME_TOKEN) {
            let renamed = name.replace(PROJECT_NAME_TOKEN, project_name);
            fs::rename(path, path.with_file_name(renamed))?;
        }
    }

    Ok(())
}
