//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ours/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::navigation::Screen;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OursConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Screen id opened at startup instead of the landing page.
    pub start_screen: Option<String>,
    /// Catalog TOML file, relative to `~/.ours/` unless absolute.
    pub catalog_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_counts: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_screen: Option<Screen>,
    /// `None` means the compiled-in sample catalog.
    pub catalog_path: Option<PathBuf>,
    pub show_counts: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_screen: None,
            catalog_path: None,
            show_counts: true,
        }
    }
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

/// Returns `~/.ours/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ours"))
}

/// Returns the path to `~/.ours/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.ours/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OursConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<OursConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(OursConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(OursConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<OursConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# OURS Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "access"            # upload, verification, thematic, framework, access
# catalog_file = "catalog.toml"      # Relative to ~/.ours/, or OURS_CATALOG env var

# [display]
# show_counts = true                 # Show record counts next to facet options
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_screen` and `cli_catalog` are from CLI flags (None = not specified).
pub fn resolve(
    config: &OursConfig,
    cli_screen: Option<Screen>,
    cli_catalog: Option<&Path>,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → landing page
    let start_screen = cli_screen.or_else(|| {
        std::env::var("OURS_START_SCREEN")
            .ok()
            .or_else(|| config.general.start_screen.clone())
            .and_then(|id| parse_screen(&id))
    });

    // Catalog: CLI → env → config (relative to ~/.ours/) → compiled-in sample
    let catalog_path = cli_catalog
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("OURS_CATALOG").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .catalog_file
                .as_deref()
                .map(resolve_catalog_file)
        });

    ResolvedConfig {
        start_screen,
        catalog_path,
        show_counts: config.display.show_counts.unwrap_or(true),
    }
}

fn parse_screen(id: &str) -> Option<Screen> {
    let screen = Screen::from_id(id.trim());
    if screen.is_none() {
        warn!("Unknown start screen '{}', opening the landing page", id);
    }
    screen
}

fn resolve_catalog_file(file: &str) -> PathBuf {
    match config_dir() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}
