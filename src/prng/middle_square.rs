//! Middle-square generator
//!
//! Square the seed and keep the middle `window_digits` digits of the
//! result. The pure `step` functions are plain `u64 -> u64` maps that can be
//! handed to a `Memoizer`; `MiddleSquare` owns a normalized seed and walks
//! the same recurrence as an iterator.
//!
//! Middle-square sequences are known to fall into short cycles or collapse
//! to zero. Nothing here tries to prevent that.

use std::iter::FusedIterator;

use crate::config::GeneratorConfig;
use crate::consts::SENTINEL;
use crate::digits::{digit_count, middle_digits, square};
use crate::errors::{Error, Result};

/// One middle-square step with the default config
///
/// Yields `SENTINEL` (zero) when the square is too short for the digit
/// window. Use `try_step` to see that case as an error instead.
pub fn step(seed: u64) -> u64 {
    step_with(seed, &GeneratorConfig::default())
}

/// One middle-square step, surfacing an unavailable digit window
pub fn try_step(seed: u64) -> Result<u64> {
    try_step_with(seed, &GeneratorConfig::default())
}

/// `step` with explicit parameters
pub fn step_with(seed: u64, config: &GeneratorConfig) -> u64 {
    match try_step_with(seed, config) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{err}; yielding sentinel {SENTINEL}");
            SENTINEL
        }
    }
}

/// `try_step` with explicit parameters
pub fn try_step_with(seed: u64, config: &GeneratorConfig) -> Result<u64> {
    let squared = square(seed);
    let width = config.window_digits;
    let window = middle_digits(squared, width).ok_or(Error::DigitWindowUnavailable {
        value: squared,
        width,
        digits: digit_count(squared),
    })?;
    u64::try_from(window)
        .map_err(|_| Error::InvalidConfig(format!("window of {width} digits does not fit in u64")))
}

/// The first `count` values of the pure recurrence starting from `seed`
///
/// Each output is the next input; `seed` itself is not included.
pub fn sequence(seed: u64, count: usize) -> Vec<u64> {
    std::iter::successors(Some(step(seed)), |&prev| Some(step(prev)))
        .take(count)
        .collect()
}

/// Stateful middle-square iterator
///
/// The seed is normalized on construction by multiplying by the config's
/// prime until it has at least `min_seed_digits` digits. Every `next` stores
/// the value it yields as the new seed. When the square of the current seed
/// is too short for the window, the sequence ends and stays ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSquare {
    seed: u64,
    config: GeneratorConfig,
}

impl MiddleSquare {
    /// Create a generator with the default config
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_config(seed, GeneratorConfig::default())
    }

    /// Create a generator with explicit parameters
    pub fn with_config(seed: u64, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        if seed == 0 {
            return Err(Error::ZeroSeed);
        }

        let mut normalized = seed;
        while digit_count(normalized as u128) < config.min_seed_digits {
            normalized = normalized
                .checked_mul(config.normalizing_prime)
                .ok_or(Error::SeedOverflow {
                    seed,
                    min_digits: config.min_seed_digits,
                })?;
        }
        log::debug!("Normalized seed {seed} -> {normalized}");

        Ok(Self {
            seed: normalized,
            config,
        })
    }

    /// Current seed (the last value yielded, or the normalized start)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl Iterator for MiddleSquare {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = try_step_with(self.seed, &self.config).ok()?;
        self.seed = value;
        Some(value)
    }
}

// A failed step leaves the seed untouched, so it fails again
impl FusedIterator for MiddleSquare {}
