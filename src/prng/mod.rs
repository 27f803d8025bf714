//! Pseudo-random generators
//!
//! Both flavours here come in a pure form, which is safe to memoize, and a
//! stateful one:
//! - `middle_square`: von Neumann's middle-square recurrence
//! - `dice`: dice rolls over `rand`, seeded through `Pcg32`

pub mod dice;
pub mod middle_square;

pub use dice::{SeededRoll, roll, seeded_roll, seeded_roll_with_next};
pub use middle_square::{MiddleSquare, sequence, step, step_with, try_step, try_step_with};
