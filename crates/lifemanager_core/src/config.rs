//! Core configuration.
//!
//! # Responsibility
//! - Describe where data and logs live and how much artificial latency the
//!   store adds.
//! - Parse configuration from JSON with every field defaulted.
//!
//! # Invariants
//! - An empty JSON object is a valid configuration (in-memory, no latency,
//!   logging not initialized).

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Artificial delays that emulate a remote document store.
///
/// The delays have no correctness effect; callers await every operation
/// regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyProfile {
    pub record_ms: u64,
    pub login_ms: u64,
    pub logout_ms: u64,
}

impl LatencyProfile {
    /// No artificial delay.
    pub const fn none() -> Self {
        Self {
            record_ms: 0,
            login_ms: 0,
            logout_ms: 0,
        }
    }

    /// Delays matching the browser mock: 500ms per record call, 800ms login,
    /// 300ms logout.
    pub const fn mock_remote() -> Self {
        Self {
            record_ms: 500,
            login_ms: 800,
            logout_ms: 300,
        }
    }

    pub fn record(&self) -> Duration {
        Duration::from_millis(self.record_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }
}

/// Sleeps for `delay` unless it is zero.
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// Store file. `None` keeps all data in memory.
    pub db_path: Option<PathBuf>,
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    pub log_level: Option<String>,
    /// Absolute directory for rolling logs. Logging stays off when absent.
    pub log_dir: Option<PathBuf>,
    pub latency: LatencyProfile,
}

impl CoreConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Effective log level.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}
