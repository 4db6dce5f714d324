// src/cli.rs

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{Config, ConfigValidationError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// strip-fixtures - remove `$fixtures` declarations from a project's test files
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the `tests` and `plugins` directories
    pub project_root: Option<PathBuf>,

    /// Only files with this extension are rewritten
    #[clap(long, short = 'x')]
    pub extension: Option<String>,

    /// Read settings from a YAML file; flags take precedence
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Report which files would change without writing them
    #[clap(long, short = 'n')]
    pub dry_run: bool,

    /// Write each file through a temporary file and rename it into place
    #[clap(long)]
    pub atomic: bool,

    /// Show detailed output
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command line arguments into a Cli structure
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Validate CLI options and build a Config from them
    pub fn validate_and_build_config(
        &self,
        base_config: Option<Config>,
    ) -> Result<Config, CliError> {
        let mut config = base_config.unwrap_or_else(|| Config::new(PathBuf::new()));

        if let Some(root) = &self.project_root {
            config.project_root = root.clone();
        }

        if config.project_root.as_os_str().is_empty() {
            config.project_root = PathBuf::from(".");
        }

        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }

        config.dry_run |= self.dry_run;
        config.atomic |= self.atomic;

        config.validate()?;
        config.project_root = config.expanded_project_root();

        Ok(config)
    }
}
