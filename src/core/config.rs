//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.whiskers/config.toml` and is optional. It is only
//! ever read; a missing file means defaults.

use log::{LevelFilter, debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::DEFAULT_FALLBACK_MESSAGE;
use crate::facts::DEFAULT_FACT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct WhiskersConfig {
    #[serde(default)]
    pub fact: FactConfig,
    #[serde(default)]
    pub confetti: ConfettiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct FactConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub fallback_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfettiConfig {
    pub enabled: Option<bool>,
    pub particles: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONFETTI_PARTICLES: usize = 40;
pub const MAX_CONFETTI_PARTICLES: usize = 400;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub fact_base_url: String,
    /// `None` disables the request timeout (`timeout_secs = 0`).
    pub fact_timeout: Option<Duration>,
    pub fallback_message: String,
    pub confetti_enabled: bool,
    pub confetti_particles: usize,
    pub log_level: LevelFilter,
}

/// Flags from the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub fact_url: Option<String>,
    pub no_confetti: bool,
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

/// Returns the path to `~/.whiskers/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".whiskers").join("config.toml"))
}

/// Load config from `~/.whiskers/config.toml`.
///
/// If the file doesn't exist, returns `WhiskersConfig::default()`. If it
/// exists but is malformed, returns `ConfigError::Parse`.
pub fn load_config() -> Result<WhiskersConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(WhiskersConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<WhiskersConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(WhiskersConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WhiskersConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Like [`load_config`], but a broken config file is logged at warn and
/// replaced by defaults. Config errors are never fatal.
pub fn load_config_or_default() -> WhiskersConfig {
    or_default(load_config())
}

pub fn load_config_or_default_from(path: &Path) -> WhiskersConfig {
    or_default(load_config_from(path))
}

fn or_default(result: Result<WhiskersConfig, ConfigError>) -> WhiskersConfig {
    result.unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        WhiskersConfig::default()
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WhiskersConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected for tests.
pub fn resolve_with_env(
    config: &WhiskersConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Fact URL: CLI → env → config → default
    let fact_base_url = cli
        .fact_url
        .clone()
        .or_else(|| env("WHISKERS_FACT_URL"))
        .or_else(|| config.fact.base_url.clone())
        .unwrap_or_else(|| DEFAULT_FACT_BASE_URL.to_string());

    // 0 means "wait forever"
    let fact_timeout = match config.fact.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    let fallback_message = config
        .fact
        .fallback_message
        .as_deref()
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(DEFAULT_FALLBACK_MESSAGE)
        .to_string();

    let confetti_enabled = !cli.no_confetti && config.confetti.enabled.unwrap_or(true);
    let confetti_particles = config
        .confetti
        .particles
        .unwrap_or(DEFAULT_CONFETTI_PARTICLES)
        .min(MAX_CONFETTI_PARTICLES);

    // Log level: env → config → default
    let log_level = env("WHISKERS_LOG_LEVEL")
        .or_else(|| config.log.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level '{}', using default", level);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        fact_base_url,
        fact_timeout,
        fallback_message,
        confetti_enabled,
        confetti_particles,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&WhiskersConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.fact_base_url, DEFAULT_FACT_BASE_URL);
        assert_eq!(resolved.fact_timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
        assert_eq!(resolved.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert!(resolved.confetti_enabled);
        assert_eq!(resolved.confetti_particles, DEFAULT_CONFETTI_PARTICLES);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WhiskersConfig {
            fact: FactConfig {
                base_url: Some("http://localhost:8080".to_string()),
                timeout_secs: Some(3),
                fallback_message: Some("No fact today.".to_string()),
            },
            confetti: ConfettiConfig {
                enabled: Some(false),
                particles: Some(12),
            },
            log: LogConfig {
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.fact_base_url, "http://localhost:8080");
        assert_eq!(resolved.fact_timeout, Some(Duration::from_secs(3)));
        assert_eq!(resolved.fallback_message, "No fact today.");
        assert!(!resolved.confetti_enabled);
        assert_eq!(resolved.confetti_particles, 12);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_precedence_cli_env_file() {
        let config = WhiskersConfig {
            fact: FactConfig {
                base_url: Some("http://file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "WHISKERS_FACT_URL").then(|| "http://env".to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.fact_base_url, "http://env");

        let cli = CliOverrides {
            fact_url: Some("http://cli".to_string()),
            no_confetti: true,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.fact_base_url, "http://cli");
        assert!(!resolved.confetti_enabled);
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config = WhiskersConfig {
            fact: FactConfig {
                timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.fact_timeout, None);
    }

    #[test]
    fn test_blank_fallback_and_bad_level_use_defaults() {
        let config = WhiskersConfig {
            fact: FactConfig {
                fallback_message: Some("   ".to_string()),
                ..Default::default()
            },
            confetti: ConfettiConfig {
                particles: Some(100_000),
                ..Default::default()
            },
            log: LogConfig {
                level: Some("chatty".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.confetti_particles, MAX_CONFETTI_PARTICLES);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[fact]
timeout_secs = 5
"#;
        let config: WhiskersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fact.timeout_secs, Some(5));
        assert!(config.fact.base_url.is_none());
        assert!(config.confetti.enabled.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[fact]
base_url = "https://catfact.ninja"
timeout_secs = 10
fallback_message = "Cats are mysterious."

[confetti]
enabled = true
particles = 60

[log]
level = "info"
"#;
        let config: WhiskersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fact.fallback_message.as_deref(), Some("Cats are mysterious."));
        assert_eq!(config.confetti.particles, Some(60));
        assert_eq!(config.log.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("whiskers-does-not-exist").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.fact.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("whiskers-bad-{}.toml", std::process::id()));
        fs::write(&path, "[fact\nbase_url = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("whiskers-broken-{}.toml", std::process::id()));
        fs::write(&path, "[confetti]\nparticles = \"lots\"").unwrap();
        let config = load_config_or_default_from(&path);
        let _ = fs::remove_file(&path);
        assert!(config.confetti.particles.is_none());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.confetti_particles, DEFAULT_CONFETTI_PARTICLES);
    }
}
