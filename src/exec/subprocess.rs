//! Subprocess execution for external build tools

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::build::Invocation;

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 if terminated by a signal)
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

/// Run a build tool invocation with inherited stdio, blocking until it
/// exits
pub fn run(invocation: &Invocation) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);
    if let Some(dir) = &invocation.cwd {
        cmd.current_dir(dir);
    }

    // Inherit stdin/stdout/stderr so the build tool owns the terminal
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute {}", invocation.program.display()))?;

    Ok(CommandResult {
        success: status.success(),
        exit_code: status.code().unwrap_or(-1),
        duration: start.elapsed(),
    })
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
