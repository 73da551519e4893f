//! Error types and helpers for user-friendly error messages

use std::path::PathBuf;

use thiserror::Error;

/// Domain errors surfaced to the user, with an actionable hint where one
/// helps
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Host OS cannot drive the requested platform toolchain
    #[error("{platform} builds require {required} (current host: {host})")]
    HostMismatch {
        platform: String,
        required: &'static str,
        host: &'static str,
    },

    /// Required external tool or wrapper script is missing
    #[error("missing tool: {tool}\n{hint}")]
    MissingTool { tool: String, hint: String },

    /// Destination project directory already exists
    #[error("project '{}' already exists at {}", .name, .path.display())]
    ProjectExists { name: String, path: PathBuf },

    /// Requested template directory does not exist
    #[error("template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },
}

/// Common hints for missing external tools
pub mod hints {
    /// Get hint for a missing Gradle wrapper
    pub fn gradle_wrapper() -> &'static str {
        "Generate the wrapper from Android Studio, or run 'gradle wrapper' \
         inside the android/ directory."
    }

    /// Get hint for missing Xcode command line tools
    pub fn xcode() -> &'static str {
        "Install Xcode from the App Store, then run: sudo xcode-select --install"
    }

    /// Get hint for missing MSBuild
    pub fn msbuild() -> &'static str {
        "Install Visual Studio with the 'Desktop development with C++' \
         workload, or run from a Developer Command Prompt so msbuild is on \
         PATH."
    }
}
