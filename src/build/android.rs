//! Android build invocation via the project's Gradle wrapper

use std::path::Path;

use anyhow::{Context, Result};

use super::Invocation;
use crate::error::{hints, ForgeError};

/// Gradle wrapper location relative to the invocation root
pub const GRADLE_WRAPPER: &str = "android/gradlew";

/// Construct the Gradle invocation, failing if the wrapper is absent
pub fn invocation(root: &Path, clean: bool) -> Result<Invocation> {
    let wrapper = root.join(GRADLE_WRAPPER);
    if !wrapper.exists() {
        return Err(ForgeError::MissingTool {
            tool: GRADLE_WRAPPER.to_string(),
            hint: hints::gradle_wrapper().to_string(),
        }
        .into());
    }

    // The child runs from android/, and relative program paths resolve
    // against the child's working directory on POSIX. Hand it an absolute
    // wrapper path so the file checked above is the file executed.
    let wrapper = wrapper
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", wrapper.display()))?;

    let task = if clean { "clean" } else { "assembleRelease" };

    Ok(Invocation::new(wrapper)
        .arg(task)
        .current_dir(root.join("android")))
}
