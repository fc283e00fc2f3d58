use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, Result};

/// Pipeline settings, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Total tries for a simplify request when the cache reports a store error.
    pub simplify_attempts: u32,
    /// Same as `simplify_attempts`, for evaluate requests.
    pub evaluate_attempts: u32,
    /// Default `tracing` filter directive for the command-line front end.
    pub log_filter: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            simplify_attempts: 2,
            evaluate_attempts: 3,
            log_filter: None,
        }
    }
}

impl PipelineConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| PolyError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PolyError::Config(e.to_string()))
    }

    pub(crate) fn simplify_attempts(&self) -> u32 {
        self.simplify_attempts.max(1)
    }

    pub(crate) fn evaluate_attempts(&self) -> u32 {
        self.evaluate_attempts.max(1)
    }
}
