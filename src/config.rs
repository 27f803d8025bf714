//! Generator configuration
//!
//! Plain serde data with JSON load/save, validated whenever it is parsed.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SEED_DIGITS, NORMALIZING_PRIME, WINDOW_DIGITS};
use crate::errors::{Error, Result};

/// Widest window whose value still fits in a `u64` output
pub const MAX_WINDOW_DIGITS: u32 = 19;

/// Middle-square generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Digits extracted from the middle of each square
    pub window_digits: u32,
    /// Digits an iterator seed is normalized up to
    pub min_seed_digits: u32,
    /// Multiplier used during normalization
    pub normalizing_prime: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            window_digits: WINDOW_DIGITS,
            min_seed_digits: MIN_SEED_DIGITS,
            normalizing_prime: NORMALIZING_PRIME,
        }
    }
}

impl GeneratorConfig {
    /// Config with a custom window and the default normalization
    pub fn with_window(window_digits: u32) -> Self {
        Self {
            window_digits,
            ..Self::default()
        }
    }

    /// Check the parameters describe a usable generator
    pub fn validate(&self) -> Result<()> {
        if self.window_digits == 0 || self.window_digits > MAX_WINDOW_DIGITS {
            return Err(Error::InvalidConfig(format!(
                "window_digits must be in 1..={MAX_WINDOW_DIGITS}, got {}",
                self.window_digits
            )));
        }
        if self.min_seed_digits == 0 || self.min_seed_digits > MAX_WINDOW_DIGITS {
            return Err(Error::InvalidConfig(format!(
                "min_seed_digits must be in 1..={MAX_WINDOW_DIGITS}, got {}",
                self.min_seed_digits
            )));
        }
        // The square of a d-digit seed has at least 2d - 1 digits
        if self.window_digits > 2 * self.min_seed_digits - 1 {
            return Err(Error::InvalidConfig(format!(
                "window_digits {} is wider than the square of a {}-digit seed",
                self.window_digits, self.min_seed_digits
            )));
        }
        if self.normalizing_prime < 2 {
            return Err(Error::InvalidConfig(format!(
                "normalizing_prime must be at least 2, got {}",
                self.normalizing_prime
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded generator config: {config:?}");
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
