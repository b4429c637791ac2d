//! Move selection.
//!
//! - [`Optimal`]: nim-sum opponent used as a sparring partner
//! - [`EpsilonGreedy`]: the learner's behaviour policy during training
//! - [`Greedy`]: read-only lookup against a trained table at play time

mod epsilon;
mod greedy;
mod optimal;

pub use epsilon::*;
pub use greedy::*;
pub use optimal::*;

use crate::*;
use rand::Rng;

/// Anything that can pick a take from a board.
///
/// Randomness is always injected so that callers control seeding.
pub trait Policy {
    /// `None` exactly when the board is terminal.
    fn decide<R>(&self, heaps: &Heaps, rng: &mut R) -> Option<Take>
    where
        R: Rng + ?Sized;
}
