//! First-visit Monte Carlo control against the nim-sum opponent.
//!
//! # Module Structure
//!
//! - `config`: Training parameters
//! - `schedule`: Epsilon annealing
//! - `seat`: Whose turn it is
//! - `outcome`: How an episode ended, and its reward
//! - `episode`: Turn alternation and the learner's trace
//! - `progress`: Win/loss bookkeeping for logging
//! - `trainer`: The training loop and credit assignment

mod config;
mod episode;
mod outcome;
mod progress;
mod schedule;
mod seat;
mod trainer;

pub use config::*;
pub use episode::*;
pub use outcome::*;
pub use progress::*;
pub use schedule::*;
pub use seat::*;
pub use trainer::*;

use crate::*;
