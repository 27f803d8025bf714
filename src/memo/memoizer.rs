//! Generic memoizing wrapper
//!
//! The cache only ever holds outputs of the wrapped transform. Entries are
//! added on a miss and never removed or replaced for the lifetime of the
//! `Memoizer`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use super::stats::MemoStats;

/// Caches the results of a one-argument transform
///
/// `invoke` runs the transform at most once per distinct key. The result is
/// only stable across calls if the transform is referentially transparent:
/// wrapping something that reads randomness, time, or captured `Cell`
/// state freezes whatever the first call happened to return.
///
/// Mutation goes through `&mut self`, so a `Memoizer` has exactly one user
/// at a time. It is not meant to be shared across threads.
pub struct Memoizer<A, B, F> {
    cache: HashMap<A, B>,
    transform: F,
    stats: MemoStats,
}

impl<A, B, F> Memoizer<A, B, F>
where
    A: Eq + Hash,
    F: Fn(&A) -> B,
{
    /// Wrap a transform with an empty cache
    pub fn new(transform: F) -> Self {
        Self::with_cache(transform, HashMap::new())
    }

    /// Look up `key`, running the transform only on a miss
    pub fn invoke(&mut self, key: A) -> B
    where
        B: Clone,
    {
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.get().clone()
            }
            Entry::Vacant(slot) => {
                let value = (self.transform)(slot.key());
                self.stats.misses += 1;
                log::trace!("Memo miss ({} misses so far)", self.stats.misses);
                slot.insert(value).clone()
            }
        }
    }
}

impl<A, B, F> Memoizer<A, B, F>
where
    A: Eq + Hash,
{
    /// Wrap a transform, starting from known input/output pairs
    ///
    /// The pairs are trusted to be what the transform would have produced.
    pub fn with_cache(transform: F, initial: HashMap<A, B>) -> Self {
        Self {
            cache: initial,
            transform,
            stats: MemoStats::default(),
        }
    }

    /// Wrap a transform that can fail
    pub fn fallible<E>(transform: F) -> Self
    where
        F: Fn(&A) -> Result<B, E>,
    {
        Self::with_cache(transform, HashMap::new())
    }

    /// Look up `key` through a fallible transform
    ///
    /// A transform error is returned unchanged and nothing is cached, so
    /// the next call with the same key runs the transform again.
    pub fn try_invoke<E>(&mut self, key: A) -> Result<B, E>
    where
        B: Clone,
        F: Fn(&A) -> Result<B, E>,
    {
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.get().clone())
            }
            Entry::Vacant(slot) => {
                let value = (self.transform)(slot.key())?;
                self.stats.misses += 1;
                log::trace!("Memo miss ({} misses so far)", self.stats.misses);
                Ok(slot.insert(value).clone())
            }
        }
    }

    /// Cached value for `key`, without running the transform
    pub fn cached(&self, key: &A) -> Option<&B> {
        self.cache.get(key)
    }

    pub fn contains(&self, key: &A) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

impl<A, F> Memoizer<A, A, F>
where
    A: Eq + Hash + Clone,
    F: Fn(&A) -> A,
{
    /// Feed each output back in as the next key, `steps` times
    ///
    /// Returns the outputs in order (the start value is not included).
    /// Revisiting a key is served from the cache.
    pub fn iterate(&mut self, start: A, steps: usize) -> Vec<A> {
        let mut outputs = Vec::with_capacity(steps);
        let mut current = start;
        for _ in 0..steps {
            current = self.invoke(current);
            outputs.push(current.clone());
        }
        outputs
    }
}

impl<A, B, F> fmt::Debug for Memoizer<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoizer")
            .field("cached", &self.cache.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
