//! Memoization module
//!
//! A `Memoizer` caches the outputs of a single-argument transform:
//! - At most one transform call per distinct key
//! - Failed calls (`try_invoke`) are never cached
//! - No eviction, no capacity bound, single owner

pub mod memoizer;
pub mod stats;

pub use memoizer::Memoizer;
pub use stats::MemoStats;
