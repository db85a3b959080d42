//! Configuration system for the LS-8 virtual machine.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (entry point, stack placement).
//! 2. **Structures:** Hierarchical config for general options and the stack region.
//! 3. **Loading:** JSON deserialization and validation.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants;

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The stack limit is not strictly below the stack top.
    #[error("stack limit {limit:#04x} must be below stack top {top:#04x}")]
    InvalidStack {
        /// Configured stack top.
        top: u8,
        /// Configured stack limit.
        limit: u8,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Stack region placement.
    #[serde(default)]
    pub stack: StackConfig,
}

impl Config {
    /// Parses a configuration from a JSON document and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON source text.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or a `ConfigError` describing the problem.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field invariants that serde cannot express.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.stack.limit >= self.stack.top {
            return Err(ConfigError::InvalidStack {
                top: self.stack.top,
                limit: self.stack.limit,
            });
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Address of the first instruction.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,
}

impl GeneralConfig {
    const fn default_start_pc() -> u8 {
        constants::RESET_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: constants::RESET_PC,
        }
    }
}

/// Placement of the downward-growing stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StackConfig {
    /// Initial stack pointer.
    #[serde(default = "StackConfig::default_top")]
    pub top: u8,

    /// Lowest address the stack may occupy; a push at this address overflows.
    #[serde(default = "StackConfig::default_limit")]
    pub limit: u8,
}

impl StackConfig {
    const fn default_top() -> u8 {
        constants::STACK_TOP
    }

    const fn default_limit() -> u8 {
        constants::STACK_LIMIT
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            top: constants::STACK_TOP,
            limit: constants::STACK_LIMIT,
        }
    }
}
