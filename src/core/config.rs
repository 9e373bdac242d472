//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quotevault/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::core::carousel::{AdvanceStep, Breakpoints, CarouselConfig};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub api_base_url: Option<String>,
    /// Default author name pre-filled into the submit form.
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselSection {
    pub auto_advance_ms: Option<u64>,
    pub swipe_threshold: Option<i32>,
    /// Terminal width (columns) from which two cards are shown.
    pub two_card_width: Option<u16>,
    /// Terminal width (columns) from which three cards are shown.
    pub three_card_width: Option<u16>,
    /// Step one item per advance instead of a full window.
    pub single_step: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub author: Option<String>,
    pub carousel: CarouselConfig,
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

/// Returns the path to `~/.quotevault/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quotevault").join("config.toml"))
}

/// Returns the path to the local key-value store file.
pub fn store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quotevault").join("store.json"))
}

/// Load config from `~/.quotevault/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VaultConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VaultConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VaultConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VaultConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VaultConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# QuoteVault Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# api_base_url = "https://quoteapp-backend-1.onrender.com"
# author = "Your Name"                # Pre-filled into the submit form

# [carousel]
# auto_advance_ms = 15000             # Quiet period before auto-rotation
# swipe_threshold = 5                 # Mouse-drag columns that count as a swipe
# two_card_width = 80                 # Columns from which two cards are shown
# three_card_width = 120              # Columns from which three cards are shown
# single_step = false                 # Advance one quote instead of a full window
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_api_url` is from the `--api-url` flag (None = not
/// specified).
pub fn resolve(config: &VaultConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("QUOTEVAULT_API_URL").ok())
        .or_else(|| config.general.api_base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let defaults = CarouselConfig::default();
    let section = &config.carousel;
    let carousel = CarouselConfig {
        auto_advance: section
            .auto_advance_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.auto_advance),
        swipe_threshold: section.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        breakpoints: Breakpoints {
            two: section.two_card_width.unwrap_or(defaults.breakpoints.two),
            three: section.three_card_width.unwrap_or(defaults.breakpoints.three),
        },
        step: match section.single_step {
            Some(true) => AdvanceStep::Single,
            _ => AdvanceStep::Window,
        },
    };

    ResolvedConfig {
        api_base_url,
        author: config.general.author.clone(),
        carousel,
    }
}
