//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mfnf-sitemap/mfnf-sitemap.toml`
//! 3. Local config: `<dir>/.mfnf-sitemap.toml`
//! 4. Environment variables: `MFNF_SITEMAP_*` prefix
//!
//! Only output concerns are configurable; the sitemap grammar is fixed.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, OutputFormat};

/// Name used for config directories and files.
pub const APP_NAME: &str = "mfnf-sitemap";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "MFNF_SITEMAP";

/// Unified configuration for mfnf-sitemap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format (default: json)
    pub format: OutputFormat,
    /// Pretty-print JSON output (default: true)
    pub pretty: bool,
    /// Write output to this file instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
            output: None,
        }
    }
}

/// Raw settings for intermediate parsing (all fields Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub output: Option<PathBuf>,
}

/// Get the XDG config directory for mfnf-sitemap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(format!(".{APP_NAME}.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(output) = &self.output {
            let expanded = expand_env_vars(output.to_string_lossy().as_ref());
            self.output = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            pretty: overlay.pretty.unwrap_or(self.pretty),
            output: overlay.output.clone().or_else(|| self.output.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.mfnf-sitemap.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply MFNF_SITEMAP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("format"), "format")? {
            settings.format = OutputFormat::from_str(&val, true).map_err(|e| {
                ApplicationError::Config {
                    message: format!("{ENV_PREFIX}_FORMAT: {e}"),
                }
            })?;
        }
        if let Some(val) = env_value(config.get_bool("pretty"), "pretty")? {
            settings.pretty = val;
        }
        if let Some(val) = env_value(config.get_string("output"), "output")? {
            settings.output = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mfnf-sitemap configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mfnf-sitemap/mfnf-sitemap.toml
#   Local:  <dir>/.mfnf-sitemap.toml
#   Env:    MFNF_SITEMAP_* environment variables (explicit overrides)

# Output format: "json" or "tree"
# format = "json"

# Pretty-print JSON output
# pretty = true

# Write output to a file instead of stdout (~ and $VAR are expanded)
# output = "~/mfnf/sitemap.json"
"#
        .to_string()
    }
}

/// Unset keys are `None`; a value that does not convert is an error naming the variable.
fn env_value<T>(
    result: Result<T, ConfigError>,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{ENV_PREFIX}_{}: {e}", key.to_uppercase()),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
