//! New project command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::error::ForgeError;
use crate::scaffold;
use crate::utils::{paths, terminal};

/// Create a new project from a template
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Name of the new project
    #[arg(long)]
    pub name: String,

    /// Template to use
    #[arg(long, default_value = "default-3d")]
    pub template: String,

    /// Platforms to generate skeletons for
    #[arg(long, num_args = 1.., default_value = "apple")]
    pub platforms: Vec<String>,
}

impl NewCommand {
    /// Execute the new command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let root = std::env::current_dir().context("Failed to get current directory")?;

        let project_path = paths::projects_dir(&root).join(&self.name);
        if project_path.exists() {
            return Err(ForgeError::ProjectExists {
                name: self.name.clone(),
                path: project_path,
            }
            .into());
        }

        let template_path = paths::templates_dir(&root).join(&self.template);
        if !template_path.exists() {
            return Err(ForgeError::TemplateNotFound {
                path: template_path,
            }
            .into());
        }

        if verbose {
            terminal::print_info(&format!("Using template {}", template_path.display()));
        }

        eprintln!("Initializing project: {}", self.name);

        let spinner = terminal::create_spinner(&format!("Copying template '{}'", self.template));
        let copied = scaffold::instantiate_template(&template_path, &project_path);
        spinner.finish_and_clear();
        copied?;

        for platform in &self.platforms {
            // A failed overlay is reported but never aborts the remaining
            // platforms.
            if let Err(e) =
                scaffold::generate_skeleton(&root, &project_path, platform, &self.name, verbose)
            {
                terminal::print_error(&format!("Failed to overlay {} skeleton: {:#}", platform, e));
            }
        }

        terminal::print_success(&format!("Project {} created", self.name));
        Ok(())
    }
}
