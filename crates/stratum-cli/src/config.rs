//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STRATUM_<SECTION>__<KEY>`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "STRATUM";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scaffold: ScaffoldConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// How layer crates are created.
    pub module_initializer: InitializerKind,
    /// Program run as `<program> new --lib <path>`.
    pub cargo_program: String,
    /// Skip the `--force` confirmation prompt.
    pub assume_yes: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            module_initializer: InitializerKind::Cargo,
            cargo_program: "cargo".into(),
            assume_yes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitializerKind {
    /// `cargo new --lib` subprocess.
    #[default]
    Cargo,
    /// Write the manifest and `src/lib.rs` directly.
    Builtin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, environment())
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: format!("{} ({})", e, path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stratum.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stratum", "stratum")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stratum.toml"))
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
