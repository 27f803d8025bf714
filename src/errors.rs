//! Error types for generator and dice operations
//!
//! Transform failures inside a `Memoizer` are not represented here: they
//! are the caller's own error type and pass through `try_invoke` untouched.

use thiserror::Error;

/// Errors raised by the digit helpers, generators and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested digit window is wider than the number
    #[error("Digit window unavailable: wanted {width} digits from {value} ({digits} digits)")]
    DigitWindowUnavailable {
        /// Number the window was taken from
        value: u128,
        /// Requested window width
        width: u32,
        /// Actual digit count of `value`
        digits: u32,
    },

    /// A zero seed never reaches the minimum digit count
    #[error("Seed must be non-zero")]
    ZeroSeed,

    /// Normalizing the seed would overflow `u64`
    #[error("Seed {seed} overflows while normalizing to {min_digits} digits")]
    SeedOverflow {
        /// Seed as passed in
        seed: u64,
        /// Digit count being normalized towards
        min_digits: u32,
    },

    /// A die needs at least one face
    #[error("Dice must have at least one side")]
    NoSides,

    /// Configuration failed to parse or validate
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_message_names_widths() {
        let err = Error::DigitWindowUnavailable {
            value: 5,
            width: 10,
            digits: 1,
        };
        assert_eq!(
            err.to_string(),
            "Digit window unavailable: wanted 10 digits from 5 (1 digits)"
        );
    }

    #[test]
    fn test_json_error_becomes_invalid_config() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
