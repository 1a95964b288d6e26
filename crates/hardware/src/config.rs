//! Configuration system for the simulator.
//!
//! This module defines the configuration structure used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (memory bound, reset PC).
//! 2. **Structure:** A flat, deserializable config for drivers that supply
//!    settings as JSON; use `Config::default()` otherwise.

use serde::Deserialize;

use crate::common::constants::MEM_SIZE_BYTES;

/// Default configuration constants for the simulator.
mod defaults {
    use super::MEM_SIZE_BYTES;

    /// Architectural memory bound in bytes (64 KiB, 16384 words).
    pub const MEMORY_BYTES: u32 = MEM_SIZE_BYTES;

    /// Program counter at reset.
    pub const PC_START: u32 = 0;
}

/// Simulator configuration.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Memory bound in bytes; rounded down to a whole number of words.
    pub memory_bytes: u32,
    /// Initial program counter.
    pub pc_start: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_bytes: defaults::MEMORY_BYTES,
            pc_start: defaults::PC_START,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error when the document is not valid
    /// JSON or contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
