//! Dispatcher configuration.
//!
//! Loads the selection policy and its parameters from TOML.
//!
//! ```
//! use u_dispatch::config::DispatchConfig;
//! use u_dispatch::dispatching::Policy;
//!
//! let config = DispatchConfig::from_toml_str(r#"
//!     seed = 7
//!
//!     [policy]
//!     type = "combined"
//!     knob = 0.8
//! "#).unwrap();
//!
//! assert_eq!(config.policy, Policy::Combined { knob: 0.8 });
//! assert_eq!(config.seed, Some(7));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatching::Policy;
use crate::error::DispatchError;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DispatchError),
}

/// Dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DispatchConfig {
    /// Selection policy.
    #[serde(default)]
    pub policy: Policy,

    /// Seed for the random policy. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Machine holding the first turn in multi-machine selection.
    #[serde(default)]
    pub initial_turn: usize,
}

impl DispatchConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.policy.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
