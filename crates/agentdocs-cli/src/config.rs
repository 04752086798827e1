//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `AGENTDOCS_<SECTION>__<KEY>`, e.g.
//!    `AGENTDOCS_GENERATE__DIRECT=true`
//! 3. Config file: `--config FILE`, else the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult, IntoCli};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "AGENTDOCS";

/// Subdirectory created by standard-mode generation.
pub const DEFAULT_SUBDIRECTORY: &str = "universal-ai-docs";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for the generate command.
    pub generate: GenerateConfig,
    /// Defaults for `new`.
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Write straight into the output directory.
    pub direct: bool,
    /// Directory created under the output directory in standard mode.
    pub subdirectory: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            direct: false,
            subdirectory: DEFAULT_SUBDIRECTORY.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Base directory new projects are created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let defaults = Config::try_from(&Self::default())
            .with_cli_context(|| "failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_cli_context(|| format!("failed to load {}", path.display()))?
            .try_deserialize()
            .with_cli_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.agentdocs.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "agentdocs")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".agentdocs.toml"))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: "failed to serialize configuration".into(),
            source: Some(Box::new(e)),
        })
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_cli_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_cli_context(|| format!("failed to write {}", path.display()))
    }

    /// Every key as a flat `section.key = value` list, in file order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        vec![
            ("output.no_color", self.output.no_color.to_string()),
            ("output.format", self.output.format.clone()),
            ("generate.output_dir", path(&self.generate.output_dir)),
            ("generate.direct", self.generate.direct.to_string()),
            ("generate.subdirectory", self.generate.subdirectory.clone()),
            ("project.output_dir", path(&self.project.output_dir)),
        ]
    }

    /// Look up one dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
    }
}
