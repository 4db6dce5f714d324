// src/config.rs

use std::path::{Path, PathBuf};

use config::FileFormat;
use serde::Deserialize;
use thiserror::Error;

use crate::ports::filesystem::FileSystem;

pub const DEFAULT_EXTENSION: &str = "php";
pub const DEFAULT_TESTS_DIR: &str = "tests";
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Where test trees live relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Test folder name, used both at the root and inside each plugin
    pub tests_dir: String,
    /// Folder whose immediate children are plugins
    pub plugins_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tests_dir: default_tests_dir(),
            plugins_dir: default_plugins_dir(),
        }
    }
}

fn default_tests_dir() -> String {
    DEFAULT_TESTS_DIR.to_string()
}

fn default_plugins_dir() -> String {
    DEFAULT_PLUGINS_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project_root: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: String,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub atomic: bool,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("Empty field: {0}")]
    EmptyField(String),

    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    #[error("Invalid directory name for {field}: {value}")]
    InvalidDirectoryName { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] config::ConfigError),
}

impl Config {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            extension: default_extension(),
            tests_dir: default_tests_dir(),
            plugins_dir: default_plugins_dir(),
            dry_run: false,
            atomic: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.project_root.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyField("project_root".to_string()));
        }

        if self.extension.is_empty() {
            return Err(ConfigValidationError::EmptyField("extension".to_string()));
        }

        if self.extension.starts_with('.') || self.extension.contains(['/', '\\']) {
            return Err(ConfigValidationError::InvalidExtension(
                self.extension.clone(),
            ));
        }

        validate_directory_name("tests_dir", &self.tests_dir)?;
        validate_directory_name("plugins_dir", &self.plugins_dir)?;

        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout {
            tests_dir: self.tests_dir.clone(),
            plugins_dir: self.plugins_dir.clone(),
        }
    }

    pub fn expanded_project_root(&self) -> PathBuf {
        let root = self.project_root.to_string_lossy();
        let expanded_path = shellexpand::tilde(&root);
        PathBuf::from(expanded_path.as_ref())
    }

    /// Load a YAML configuration file. Missing keys fall back to defaults; the
    /// result is not validated here because CLI flags may still override it.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = fs
            .read_file(path)
            .map_err(|e| ConfigLoadError::ReadError(e.to_string()))?;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(&contents, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}

fn validate_directory_name(field: &str, value: &str) -> Result<(), ConfigValidationError> {
    if value.is_empty() {
        return Err(ConfigValidationError::EmptyField(field.to_string()));
    }

    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(ConfigValidationError::InvalidDirectoryName {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}

// Builder pattern for testing
#[derive(Default)]
pub struct ConfigBuilder {
    project_root: PathBuf,
    extension: Option<String>,
    layout: Layout,
    dry_run: bool,
    atomic: bool,
}

impl ConfigBuilder {
    pub fn project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = Some(extension.to_string());
        self
    }

    pub fn tests_dir(mut self, tests_dir: &str) -> Self {
        self.layout.tests_dir = tests_dir.to_string();
        self
    }

    pub fn plugins_dir(mut self, plugins_dir: &str) -> Self {
        self.layout.plugins_dir = plugins_dir.to_string();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn build(self) -> Config {
        Config {
            project_root: self.project_root,
            extension: self.extension.unwrap_or_else(default_extension),
            tests_dir: self.layout.tests_dir,
            plugins_dir: self.layout.plugins_dir,
            dry_run: self.dry_run,
            atomic: self.atomic,
        }
    }
}
