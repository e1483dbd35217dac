//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tick/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::action::Command;
use crate::core::history::DEFAULT_HISTORY_LIMIT;
use crate::core::key::KeyCombo;
use crate::core::keymap::{Binding, Keymap};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TickConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub history_limit: Option<usize>,
    pub initial_items: Option<Vec<String>>,
    pub status_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub completed_style: Option<CompletedStyle>,
    pub bullet: Option<String>,
}

/// Extra key combinations, added on top of the built-in bindings.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeysConfig {
    pub toggle_completed: Option<Vec<String>>,
    pub append: Option<Vec<String>>,
}

/// How a completed item is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompletedStyle {
    #[default]
    Strikethrough,
    Dim,
    Checkbox,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BULLET: &str = "•";
pub const DEFAULT_STATUS_MESSAGE: &str = "Ctrl+N add · Ctrl+Enter complete · Esc quit";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub history_limit: usize,
    pub initial_items: Vec<String>,
    pub status_message: String,
    pub completed_style: CompletedStyle,
    pub bullet: String,
    pub keymap: Keymap,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TickConfig::default(), None, &[])
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tick/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tick").join("config.toml"))
}

/// Load config from `~/.tick/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TickConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TickConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TickConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TickConfig::default());
    }

    let config = parse_config(&fs::read_to_string(&path)?)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TickConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tick configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# history_limit = 200                 # Undo steps kept; 0 disables undo
# initial_items = ["Buy milk", "Walk dog"]
# status_message = "Ctrl+N add · Ctrl+Enter complete · Esc quit"

# [display]
# completed_style = "strikethrough"   # "strikethrough", "dim" or "checkbox"
# bullet = "•"

# [keys]
# toggle_completed = ["Ctrl+d"]       # Added to Ctrl/Meta/Shift+Enter
# append = ["Alt+Enter"]              # Added to Ctrl+N
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `cli_style` comes from `--style`, `cli_items` from positional arguments
/// (empty = not specified).
pub fn resolve(
    config: &TickConfig,
    cli_style: Option<CompletedStyle>,
    cli_items: &[String],
) -> ResolvedConfig {
    // Completed style: CLI → env → config → default
    let completed_style = cli_style
        .or_else(|| {
            std::env::var("TICK_COMPLETED_STYLE")
                .ok()
                .and_then(|s| CompletedStyle::from_str(&s, true).ok())
        })
        .or(config.display.completed_style)
        .unwrap_or_default();

    // History limit: env → config → default
    let history_limit = std::env::var("TICK_HISTORY_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.general.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    // Initial items: CLI → config → nothing
    let initial_items = if cli_items.is_empty() {
        config.general.initial_items.clone().unwrap_or_default()
    } else {
        cli_items.to_vec()
    };

    ResolvedConfig {
        history_limit,
        initial_items,
        status_message: config
            .general
            .status_message
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string()),
        completed_style,
        bullet: config
            .display
            .bullet
            .clone()
            .unwrap_or_else(|| DEFAULT_BULLET.to_string()),
        keymap: resolve_keymap(&config.keys),
    }
}

/// Built-in bindings plus any extra combos from `[keys]`.
/// Unparseable combos are logged and skipped.
fn resolve_keymap(keys: &KeysConfig) -> Keymap {
    let mut keymap = Keymap::default();
    let extras = [
        (&keys.toggle_completed, Command::ToggleCompleted),
        (&keys.append, Command::Append),
    ];
    for (combos, command) in extras {
        for raw in combos.iter().flatten() {
            match raw.parse::<KeyCombo>() {
                Ok(combo) => {
                    debug!("Binding {} to {:?}", combo, command);
                    keymap.bind(combo, Binding::Edit(command));
                }
                Err(e) => warn!("Ignoring key binding {:?} for {:?}: {}", raw, command, e),
            }
        }
    }
    keymap
}
