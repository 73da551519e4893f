//! Check command implementation
//!
//! Reports host compatibility and toolchain availability for each platform
//! without running any build.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::build::android;
use crate::commands::build::Platform;
use crate::error::hints;
use crate::exec::subprocess::command_exists;

/// Check host and toolchain availability
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Platform to check (all, macos, ios, visionos, android, windows)
    #[arg(default_value = "all")]
    pub platform: String,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let host = std::env::consts::OS;
        println!("Checking {} platform configuration...\n", self.platform);

        let platforms: Vec<Platform> = match self.platform.as_str() {
            "all" => vec![
                Platform::Macos,
                Platform::Ios,
                Platform::Visionos,
                Platform::Android,
                Platform::Windows,
            ],
            "macos" => vec![Platform::Macos],
            "ios" => vec![Platform::Ios],
            "visionos" => vec![Platform::Visionos],
            "android" => vec![Platform::Android],
            "windows" => vec![Platform::Windows],
            _ => {
                eprintln!("Unknown platform: {}", self.platform);
                eprintln!("Valid platforms: all, macos, ios, visionos, android, windows");
                std::process::exit(1);
            }
        };

        let mut all_ok = true;
        for platform in platforms {
            all_ok &= check_platform(platform, host);
        }

        if !all_ok {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Report one platform; returns false when a tool required on this host is
/// missing
fn check_platform(platform: Platform, host: &str) -> bool {
    println!("{}", style(format!("[{}]", platform)).cyan().bold());

    if !platform.supported_on(host) {
        let required = if platform.is_apple() { "macOS" } else { "Windows" };
        println!(
            "  {} host: requires {} (current host: {})",
            style("-").dim(),
            required,
            host
        );
        println!();
        return true;
    }

    println!("  {} host: {}", style("✓").green(), host);

    let ok = match platform {
        Platform::Macos | Platform::Ios | Platform::Visionos => {
            report_tool("xcodebuild", hints::xcode())
        }
        Platform::Windows => report_tool("msbuild", hints::msbuild()),
        Platform::Android => report_wrapper(),
    };

    println!();
    ok
}

fn report_tool(tool: &str, hint: &str) -> bool {
    if command_exists(tool) {
        println!("  {} {}: found", style("✓").green(), tool);
        true
    } else {
        println!("  {} {}: not found", style("✗").red(), tool);
        println!("    {}", hint);
        false
    }
}

fn report_wrapper() -> bool {
    let wrapper = Path::new(android::GRADLE_WRAPPER);
    if wrapper.exists() {
        println!("  {} {}: found", style("✓").green(), android::GRADLE_WRAPPER);
        true
    } else {
        println!(
            "  {} {}: not found",
            style("✗").red(),
            android::GRADLE_WRAPPER
        );
        println!("    {}", hints::gradle_wrapper());
        false
    }
}
