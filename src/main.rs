//! Forge CLI - build dispatcher and project generator for multi-platform
//! engine projects
//!
//! ## Architecture
//!
//! ```text
//! CLI → commands/ → build/    → xcodebuild / gradlew / MSBuild
//!                 → scaffold/ → templates/, platforms/, projects/
//! ```

mod build;
mod cli;
mod commands;
mod error;
mod exec;
mod scaffold;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
