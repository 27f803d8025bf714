//! Memo Square - memoized pure transforms and a middle-square PRNG
//!
//! Core modules:
//! - `memo`: Generic memoizing wrapper around a one-argument transform
//! - `prng`: Middle-square generator (pure step + stateful iterator) and seeded dice
//! - `digits`: Decimal digit helpers (count, power, middle-window extraction)
//! - `config`: Data-driven generator parameters
//! - `errors`: Crate error type
//!
//! Everything here is single-threaded and in-process. A `Memoizer` is only
//! as deterministic as the transform it wraps: it freezes the first result
//! it sees for each key, whether or not the transform is pure.

pub mod config;
pub mod digits;
pub mod errors;
pub mod memo;
pub mod prng;

pub use config::GeneratorConfig;
pub use errors::{Error, Result};
pub use memo::{MemoStats, Memoizer};
pub use prng::{MiddleSquare, seeded_roll, step, try_step};

/// Generator constants
pub mod consts {
    /// Width of the digit window extracted from each square
    pub const WINDOW_DIGITS: u32 = 8;
    /// Minimum decimal digits of a normalized iterator seed
    pub const MIN_SEED_DIGITS: u32 = 16;
    /// Multiplier applied until a seed reaches `MIN_SEED_DIGITS`
    pub const NORMALIZING_PRIME: u64 = 15_485_863;
    /// Value `step` yields when the digit window is unavailable
    pub const SENTINEL: u64 = 0;
}
