//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quiz-tui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::questions::{DEFAULT_TRIVIA_API_URL, TriviaQuery};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub two_step_confirmation: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub url: Option<String>,
    pub limit: Option<u32>,
    pub categories: Option<Vec<String>>,
    pub difficulties: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
}

/// Overrides taken from command-line flags. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub single_step: bool,
    pub url: Option<String>,
    pub limit: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub two_step: bool,
    pub api_url: String,
    pub query: TriviaQuery,
    pub timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quiz-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quiz-tui").join("config.toml"))
}

/// Load config from `~/.quiz-tui/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuizConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# quiz-tui configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# two_step_confirmation = true       # false: one press scores and moves on (or QUIZ_TWO_STEP)

# [api]
# url = "https://the-trivia-api.com/v2/questions"   # Or set QUIZ_API_URL env var
# limit = 10
# categories = ["science", "history"]
# difficulties = ["easy", "medium"]
# timeout_secs = 10
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &QuizConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Two-step: CLI → env → config → default (true)
    let two_step = if cli.single_step {
        false
    } else {
        env("QUIZ_TWO_STEP")
            .and_then(|v| parse_bool(&v))
            .or(config.general.two_step_confirmation)
            .unwrap_or(true)
    };

    // API URL: CLI → env → config → default
    let api_url = cli
        .url
        .clone()
        .or_else(|| env("QUIZ_API_URL"))
        .or_else(|| config.api.url.clone())
        .unwrap_or_else(|| DEFAULT_TRIVIA_API_URL.to_string());

    let query = TriviaQuery {
        limit: cli.limit.or(config.api.limit),
        categories: config.api.categories.clone().unwrap_or_default(),
        difficulties: config.api.difficulties.clone().unwrap_or_default(),
    };

    ResolvedConfig {
        two_step,
        api_url,
        query,
        timeout: Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognized boolean value: {:?}", other);
            None
        }
    }
}
