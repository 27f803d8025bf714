//! Dice rolls
//!
//! `roll` draws from whatever RNG it is handed, so memoizing it just
//! freezes the first roll. `seeded_roll` builds a fresh `Pcg32` from its
//! seed every call, which makes it a pure function of `(seed, sides)`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Roll a die with `sides` faces, numbered `0..sides`
pub fn roll<R: Rng>(rng: &mut R, sides: u32) -> Result<u32> {
    if sides == 0 {
        return Err(Error::NoSides);
    }
    Ok(rng.random_range(0..sides))
}

/// Roll once from a generator seeded with `seed`
pub fn seeded_roll(seed: u64, sides: u32) -> Result<u32> {
    let mut rng = Pcg32::seed_from_u64(seed);
    roll(&mut rng, sides)
}

/// A roll plus the seed to use for the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeededRoll {
    pub value: u32,
    pub next_seed: u64,
}

/// `seeded_roll` that also hands back a follow-up seed
///
/// Threading `next_seed` into the next call gives a reproducible stream of
/// rolls without any hidden state.
pub fn seeded_roll_with_next(seed: u64, sides: u32) -> Result<SeededRoll> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let value = roll(&mut rng, sides)?;
    Ok(SeededRoll {
        value,
        next_seed: rng.random(),
    })
}
