//! Build command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::build;
use crate::error::ForgeError;
use crate::exec::subprocess;
use crate::utils::terminal;

/// Target platform for the build dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    /// macOS desktop
    Macos,
    /// iOS devices
    Ios,
    /// visionOS headsets
    Visionos,
    /// Android devices
    Android,
    /// Windows desktop
    Windows,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Macos => write!(f, "macos"),
            Platform::Ios => write!(f, "ios"),
            Platform::Visionos => write!(f, "visionos"),
            Platform::Android => write!(f, "android"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

impl Platform {
    /// Whether this platform uses the Apple toolchain family
    pub fn is_apple(&self) -> bool {
        matches!(self, Platform::Macos | Platform::Ios | Platform::Visionos)
    }

    /// Human-readable label used in xcodebuild's generic destination
    pub fn destination_label(&self) -> &'static str {
        match self {
            Platform::Macos => "macOS",
            Platform::Ios => "iOS",
            Platform::Visionos => "visionOS",
            Platform::Android => "Android",
            Platform::Windows => "Windows",
        }
    }

    /// Whether a host OS can drive this platform's toolchain natively
    pub fn supported_on(&self, host_os: &str) -> bool {
        match self {
            // Apple platforms require Xcode, which only runs on macOS
            Platform::Macos | Platform::Ios | Platform::Visionos => host_os == "macos",

            // MSBuild requires a Windows host
            Platform::Windows => host_os == "windows",

            // The Gradle wrapper runs anywhere
            Platform::Android => true,
        }
    }

    /// Fail fast if the current host cannot drive this platform
    pub fn require_host(&self) -> Result<()> {
        let host = std::env::consts::OS;
        if self.supported_on(host) {
            return Ok(());
        }

        let required = if self.is_apple() { "macOS" } else { "Windows" };
        Err(ForgeError::HostMismatch {
            platform: self.to_string(),
            required,
            host,
        }
        .into())
    }
}

/// Build the project for a target platform
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Target platform to build
    #[arg(long, value_enum)]
    pub platform: Platform,

    /// Clean build artifacts instead of building
    #[arg(long)]
    pub clean: bool,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, verbose: bool) -> Result<()> {
        self.platform.require_host()?;

        let root = std::env::current_dir()?;
        let invocation = build::plan(self.platform, self.clean, &root)?;

        eprintln!("\nRunning: {}\n", invocation.display_line());

        let result = subprocess::run(&invocation)?;
        if !result.success {
            terminal::print_error(&format!(
                "Command failed with exit code {}",
                result.exit_code
            ));
            // The external tool's exit code is the authoritative result
            std::process::exit(result.exit_code);
        }

        if verbose {
            eprintln!(
                "{} {} completed in {:.2}s",
                self.platform,
                if self.clean { "clean" } else { "build" },
                result.duration.as_secs_f64()
            );
        }

        Ok(())
    }
}
