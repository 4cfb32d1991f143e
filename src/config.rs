// SPDX-FileCopyrightText: 2026 Greenbone AG
//
// SPDX-License-Identifier: GPL-2.0-or-later WITH x11vnc-openssl-exception

//! # Configuration
//!
//! ```toml
//! [credentials]
//! username = "admin"
//! password = "admin"
//!
//! [defaults]
//! scanner = "OpenVAS Default"
//! scan_config = "Full and fast"
//! report_format = "TXT"
//!
//! [log]
//! level = "INFO"
//! ```
use std::{collections::HashMap, fmt, path::Path, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{Level, metadata::ParseLevelError};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the scanner used when none is given
pub const DEFAULT_SCANNER_NAME: &str = "OpenVAS Default";
/// Name of the scan config used when none is given
pub const DEFAULT_CONFIG_NAME: &str = "Full and fast";
/// Name of the report format used when none is given
pub const DEFAULT_FORMAT_NAME: &str = "TXT";

/// Errors while loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file cannot be read
    #[error("Unable to read {path}: {reason}")]
    Read {
        /// Path of the file
        path: String,
        /// Reason of the failure
        reason: String,
    },
    /// The content is not a valid configuration
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A global subscriber is already installed
    #[error("Unable to install the log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Credentials used to authenticate once per session
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Name of the GMP user
    pub username: String,
    /// Password of the GMP user
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Names of the resources used when a command omits them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Name of the default scanner
    pub scanner: String,
    /// Name of the default scan config
    pub scan_config: String,
    /// Name of the default report format
    pub report_format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            scanner: DEFAULT_SCANNER_NAME.to_string(),
            scan_config: DEFAULT_CONFIG_NAME.to_string(),
            report_format: DEFAULT_FORMAT_NAME.to_string(),
        }
    }
}

/// A tracing level (de)serialized by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SerLevel(Level);

impl Default for SerLevel {
    fn default() -> Self {
        Self(Level::INFO)
    }
}

impl FromStr for SerLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_str(s).map(SerLevel)
    }
}

impl From<Level> for SerLevel {
    fn from(level: Level) -> Self {
        SerLevel(level)
    }
}

impl From<SerLevel> for Level {
    fn from(ser_level: SerLevel) -> Self {
        ser_level.0
    }
}

impl Serialize for SerLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for SerLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Level::from_str(&s)
            .map(SerLevel)
            .map_err(serde::de::Error::custom)
    }
}

/// Log levels, `additional` sets levels per target e.g. `gvmlib = "TRACE"`
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Logging {
    /// Default level
    pub level: SerLevel,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    /// Levels per target
    pub additional: HashMap<String, SerLevel>,
}

impl Logging {
    /// Installs a global fmt subscriber
    ///
    /// The library itself never does that; it is meant for applications and
    /// tests using gvmlib. Fails when a global subscriber is already set.
    pub fn init(&self) -> Result<(), ConfigError> {
        let mut filter = filter::Targets::new().with_default(Level::from(self.level));
        for (name, level) in self.additional.iter() {
            filter = filter.with_target(name, Level::from(*level));
        }
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .try_init()?;
        Ok(())
    }
}

/// Configuration of a gvmlib session
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credentials to authenticate with
    pub credentials: Credentials,
    /// Names of the default resources
    pub defaults: Defaults,
    /// Log configuration
    pub log: Logging,
}

impl Config {
    /// Parses a TOML configuration
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads and parses a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}
