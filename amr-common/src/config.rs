//! Configuration loading for the interpretation engine
//!
//! Resolution follows a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::models::Guideline;
use crate::{Error, Result};

/// Environment variable consulted when no CLI value is given
pub const GUIDELINE_ENV_VAR: &str = "AMR_DEFAULT_GUIDELINE";

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Guideline applied to rows that do not declare one
    pub default_guideline: Guideline,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_guideline: Guideline::Clsi,
        }
    }
}

impl EngineConfig {
    /// Resolve the engine configuration.
    ///
    /// `cli_guideline` is the raw value of a command-line override, if any;
    /// `config_file` is an optional TOML file path. An unparseable guideline
    /// name anywhere in the chain is an error, never silently defaulted.
    pub fn resolve(cli_guideline: Option<&str>, config_file: Option<&Path>) -> Result<Self> {
        // Priority 1: command-line argument
        if let Some(raw) = cli_guideline {
            let default_guideline = raw.parse()?;
            debug!(guideline = %default_guideline, "default guideline from CLI argument");
            return Ok(Self { default_guideline });
        }

        // Priority 2: environment variable
        if let Ok(raw) = std::env::var(GUIDELINE_ENV_VAR) {
            let default_guideline = raw.parse()?;
            debug!(guideline = %default_guideline, "default guideline from {}", GUIDELINE_ENV_VAR);
            return Ok(Self { default_guideline });
        }

        // Priority 3: TOML config file
        if let Some(path) = config_file {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("cannot read config file {}: {}", path.display(), e))
            })?;
            let config: EngineConfig = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;
            debug!(guideline = %config.default_guideline, "default guideline from config file");
            return Ok(config);
        }

        // Priority 4: compiled default
        Ok(Self::default())
    }
}
