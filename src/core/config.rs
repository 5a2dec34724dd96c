//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.guide/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::Section;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_section: Option<String>,
    pub animations: Option<bool>,
    pub stagger_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Delay between consecutive cards appearing after a filter change.
pub const DEFAULT_STAGGER_MS: u64 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub initial_section: Section,
    pub animations: bool,
    pub stagger_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_section: Section::Guides,
            animations: true,
            stagger_ms: DEFAULT_STAGGER_MS,
        }
    }
}

/// Overrides coming from CLI flags (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub section: Option<Section>,
    pub no_animations: bool,
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

/// Returns the path to `~/.guide/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".guide").join("config.toml"))
}

/// Load config from `~/.guide/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GuideConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GuideConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GuideConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GuideConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GuideConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<GuideConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Guide Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_section = "guides"   # "home", "guides", "explore" or "discover"
# animations = true            # staggered card entrance after a filter change
# stagger_ms = 100             # delay between consecutive cards
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
pub fn resolve(config: &GuideConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &GuideConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Section: CLI → env → config → default. Unknown tags land on Home.
    let initial_section = cli
        .section
        .or_else(|| env("GUIDE_SECTION").map(|s| Section::from_tag(&s)))
        .or_else(|| {
            config
                .general
                .initial_section
                .as_deref()
                .map(Section::from_tag)
        })
        .unwrap_or_default();

    // Animations: --no-animations wins, then env, then config
    let animations = if cli.no_animations {
        false
    } else {
        env("GUIDE_ANIMATIONS")
            .and_then(|v| parse_bool(&v))
            .or(config.general.animations)
            .unwrap_or(true)
    };

    ResolvedConfig {
        initial_section,
        animations,
        stagger_ms: config.general.stagger_ms.unwrap_or(DEFAULT_STAGGER_MS),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognized boolean value: {other}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_nothing_set() {
        let resolved = resolve_with_env(&GuideConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.initial_section, Section::Guides);
    }

    #[test]
    fn parses_sparse_file() {
        let config = parse_config("[general]\ninitial_section = \"explore\"\n").unwrap();
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.initial_section, Section::Explore);
        assert!(resolved.animations);
        assert_eq!(resolved.stagger_ms, DEFAULT_STAGGER_MS);
    }

    #[test]
    fn empty_file_is_valid() {
        let config = parse_config("").unwrap();
        assert!(config.general.initial_section.is_none());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = parse_config("[general\nanimations = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn unknown_section_tag_falls_back_to_home() {
        let config = parse_config("[general]\ninitial_section = \"contact\"\n").unwrap();
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.initial_section, Section::Home);
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let config = parse_config("[general]\ninitial_section = \"explore\"\nanimations = true\n").unwrap();
        let env = |key: &str| match key {
            "GUIDE_SECTION" => Some("discover".to_string()),
            "GUIDE_ANIMATIONS" => Some("off".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.initial_section, Section::Discover);
        assert!(!resolved.animations);

        let cli = CliOverrides {
            section: Some(Section::Home),
            no_animations: false,
        };
        let resolved = resolve_with_env(&config, cli, env);
        assert_eq!(resolved.initial_section, Section::Home);
    }

    #[test]
    fn no_animations_flag_wins() {
        let config = parse_config("[general]\nanimations = true\n").unwrap();
        let cli = CliOverrides {
            section: None,
            no_animations: true,
        };
        let resolved = resolve_with_env(&config, cli, no_env);
        assert!(!resolved.animations);
    }

    #[test]
    fn load_generates_default_when_missing() {
        let dir = std::env::temp_dir().join(format!("guide-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.initial_section.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [general]"));

        // The generated file is all comments, so it parses to defaults.
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.general.animations.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
