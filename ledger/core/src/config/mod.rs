//! TOML Configuration File Support
//!
//! Configuration loading for the ledger, from an optional TOML file at
//! `~/.config/bill-splitter/config.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [display]
//! currency_symbol = "$"
//!
//! [avatars]
//! default_url = "https://i.pravatar.cc/48"
//!
//! [seed]
//! enabled = true
//!
//! [[seed.friends]]
//! id = "118836"
//! name = "Clark"
//! image = "https://i.pravatar.cc/48?u=118836"
//! balance = -7.0
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::DEFAULT_AVATAR_URL;
use crate::friends::{initial_friends, Friend};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Display section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    /// Symbol printed before amounts
    pub currency_symbol: Option<String>,
}

/// Avatar section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarToml {
    /// Image URL the add-friend form starts with
    pub default_url: Option<String>,
}

/// Seed section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedToml {
    /// Whether to start with seed friends at all
    pub enabled: Option<bool>,

    /// Replacement seed list (the built-in list is used when absent)
    pub friends: Option<Vec<Friend>>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerToml {
    /// Display configuration section
    pub display: DisplayToml,

    /// Avatar configuration section
    pub avatars: AvatarToml,

    /// Seed configuration section
    pub seed: SeedToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved ledger configuration
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Symbol printed before amounts
    pub currency_symbol: String,

    /// Image URL the add-friend form starts with
    pub default_avatar_url: String,

    /// Whether the ledger starts with `seed_friends`
    pub seed_enabled: bool,

    /// Friends a fresh ledger starts with
    pub seed_friends: Vec<Friend>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            seed_enabled: true,
            seed_friends: initial_friends(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl LedgerConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Friends the ledger should start with
    #[must_use]
    pub fn starting_friends(&self) -> &[Friend] {
        if self.seed_enabled {
            &self.seed_friends
        } else {
            &[]
        }
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if seed friend IDs repeat.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for friend in &self.seed_friends {
            if !seen.insert(&friend.id) {
                return Err(ConfigError::ValidationError(format!(
                    "seed friend id {} appears more than once",
                    friend.id
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/bill-splitter/config.toml` or
/// `~/.config/bill-splitter/config.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bill-splitter").join("config.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
/// A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<LedgerConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the result fails [`LedgerConfig::validate`].
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<LedgerConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, reading environment variables through `lookup`
fn load_config_with_env<F>(path: Option<PathBuf>, lookup: F) -> Result<LedgerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LedgerConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: LedgerToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, lookup);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut LedgerConfig, toml: LedgerToml) {
    if let Some(symbol) = toml.display.currency_symbol {
        config.currency_symbol = symbol;
    }
    if let Some(url) = toml.avatars.default_url {
        config.default_avatar_url = url;
    }
    if let Some(enabled) = toml.seed.enabled {
        config.seed_enabled = enabled;
    }
    if let Some(friends) = toml.seed.friends {
        config.seed_friends = friends;
    }
}

/// Apply environment variable overrides to the config
///
/// `lookup` returns the value of a variable, or `None` when unset.
fn apply_env_config<F>(config: &mut LedgerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(symbol) = lookup("BILL_SPLITTER_CURRENCY") {
        config.currency_symbol = symbol;
        config.source = ConfigSource::Env;
    }
    if let Some(url) = lookup("BILL_SPLITTER_AVATAR_URL") {
        config.default_avatar_url = url;
        config.source = ConfigSource::Env;
    }
    if let Some(seed) = lookup("BILL_SPLITTER_SEED") {
        config.seed_enabled = seed_flag(&seed);
        config.source = ConfigSource::Env;
    }
}

/// `0` and `false` (any case) disable seeding; anything else enables it
fn seed_flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

// =============================================================================
// CLI Overrides
// =============================================================================

/// Configuration overrides from command-line arguments
///
/// Every field is optional; only the ones set are applied.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Currency symbol override
    pub currency_symbol: Option<String>,
    /// Default avatar URL override
    pub default_avatar_url: Option<String>,
    /// Seed toggle override
    pub seed_enabled: Option<bool>,
}

impl ConfigOverrides {
    /// Create empty overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the currency symbol
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: String) -> Self {
        self.currency_symbol = Some(symbol);
        self
    }

    /// Override the default avatar URL
    #[must_use]
    pub fn with_default_avatar_url(mut self, url: String) -> Self {
        self.default_avatar_url = Some(url);
        self
    }

    /// Override whether seed friends are loaded
    #[must_use]
    pub fn with_seed_enabled(mut self, enabled: bool) -> Self {
        self.seed_enabled = Some(enabled);
        self
    }

    /// Apply the overrides to a loaded configuration
    pub fn apply(&self, config: &mut LedgerConfig) {
        let mut applied = false;

        if let Some(ref symbol) = self.currency_symbol {
            config.currency_symbol = symbol.clone();
            applied = true;
        }
        if let Some(ref url) = self.default_avatar_url {
            config.default_avatar_url = url.clone();
            applied = true;
        }
        if let Some(enabled) = self.seed_enabled {
            config.seed_enabled = enabled;
            applied = true;
        }

        if applied {
            config.source = ConfigSource::Cli;
        }
    }
}
