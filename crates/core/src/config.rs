//! Configuration management for greeter.
//!
//! Layered: built-in defaults, then a TOML file. The file is looked up in
//! the XDG config directory first, then `./greeter.toml`. A missing file
//! means defaults; a present but broken file is an error. A `[features]`
//! table is laid over the default flags, so unlisted flags keep their
//! default.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::features::FeatureFlags;
use crate::greeting::{GreetingStyle, Language};
use crate::name::NameRules;
use crate::result::Result;

pub const LOCAL_CONFIG_FILE: &str = "greeter.toml";

// =============================================================================
// Log Level
// =============================================================================

/// Logging level. Case-insensitive when parsed, `Info` by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Trace => write!(f, "TRACE"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(Self::Error),
            "WARN" => Ok(Self::Warn),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            _ => Err(Error::validation(
                "log_level",
                format!("Invalid log level: '{s}'. Must be ERROR, WARN, INFO, DEBUG, or TRACE"),
            )),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreeterConfig {
    pub style: GreetingStyle,
    pub language: Language,
    pub log_level: LogLevel,
    pub rules: NameRules,
    pub features: FeatureFlags,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            style: GreetingStyle::default(),
            language: Language::default(),
            log_level: LogLevel::default(),
            rules: NameRules::default(),
            features: FeatureFlags::new()
                .enable("time_greeting")
                .enable("multi_language"),
        }
    }
}

impl GreeterConfig {
    /// Parse TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        let config: Self =
            toml::from_str(text).map_err(|e| Error::config_parse(&origin, e.to_string()))?;
        let rules = config.rules.validated()?;
        let features = Self::default().features.overlay(&config.features);
        Ok(Self {
            rules,
            features,
            ..config
        })
    }

    /// Load a specific file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read(path, e.to_string()))?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `explicit` if given, else the first existing default location,
    /// else built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => config_search_paths()
                .into_iter()
                .find(|candidate| candidate.is_file())
                .map_or_else(
                    || {
                        tracing::debug!("no config file found, using defaults");
                        Ok(Self::default())
                    },
                    |path| Self::load(&path),
                ),
        }
    }
}

// =============================================================================
// XDG Path Resolution
// =============================================================================

/// Candidate config files, most specific first.
pub fn config_search_paths() -> Vec<PathBuf> {
    xdg_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
        .collect()
}

/// `~/.config/greeter/config.toml` on Unix-like systems, when resolvable.
fn xdg_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "greeter").map(|dirs| dirs.config_dir().join("config.toml"))
}
