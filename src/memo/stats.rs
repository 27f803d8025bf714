//! Cache hit/miss counters

use serde::{Deserialize, Serialize};

/// Lookup counters for a `Memoizer`
///
/// Entries supplied up front through `Memoizer::with_cache` count as
/// neither hits nor misses until they are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the transform and stored its result
    pub misses: u64,
}

impl MemoStats {
    /// Total successful lookups
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from the cache (0.0 when nothing was looked up)
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hit_rate() {
        let stats = MemoStats::default();
        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = MemoStats { hits: 3, misses: 1 };
        assert_eq!(stats.lookups(), 4);
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_as_counters() {
        let stats = MemoStats { hits: 2, misses: 5 };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"hits":2,"misses":5}"#);
    }
}
