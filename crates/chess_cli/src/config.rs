//! Settings file for the command-line front end.
//!
//! ```toml
//! depth = 6
//! log_level = "warn"
//! human_plays_white = true
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Deepest search the front end accepts.
pub const MAX_DEPTH: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Plies searched for every engine move.
    pub depth: u8,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Ask at startup when unset.
    pub human_plays_white: Option<bool>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            depth: minimax_engine::DEFAULT_DEPTH,
            log_level: "warn".to_string(),
            human_plays_white: None,
        }
    }
}

impl CliConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            bail!("depth must be between 1 and {MAX_DEPTH}, got {}", self.depth);
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        depth: Option<u8>,
        human_plays_white: Option<bool>,
    ) -> Result<Self> {
        if let Some(depth) = depth {
            self.depth = depth;
        }
        if human_plays_white.is_some() {
            self.human_plays_white = human_plays_white;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
