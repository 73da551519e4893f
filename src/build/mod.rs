//! Platform build dispatch
//!
//! Maps a target platform to exactly one external build tool invocation.
//! Constructing an invocation is separated from executing it so argument
//! lists can be inspected and tested without spawning a process.
//!
//! ## Modules
//!
//! - `apple` - xcodebuild invocations for macOS, iOS and visionOS
//! - `android` - Gradle wrapper invocation
//! - `windows` - MSBuild invocation

pub mod android;
pub mod apple;
pub mod windows;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::commands::build::Platform;

/// One external build tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: PathBuf,
    /// Ordered argument list
    pub args: Vec<String>,
    /// Working directory for the child, if it differs from the caller's
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Start an invocation for the given program
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the child's working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Single-line rendering for progress output
    pub fn display_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Construct the single invocation for a platform and action
///
/// `root` is the invocation root against which fixed relative paths
/// (the Gradle wrapper, child working directories) are resolved.
pub fn plan(platform: Platform, clean: bool, root: &Path) -> Result<Invocation> {
    match platform {
        Platform::Macos | Platform::Ios | Platform::Visionos => {
            Ok(apple::invocation(platform.destination_label(), clean))
        }
        Platform::Android => android::invocation(root, clean),
        Platform::Windows => Ok(windows::invocation(clean)),
    }
}
