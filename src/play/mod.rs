//! Playing a trained table.
//!
//! - [`Human`]: Terminal prompt for human takes
//! - [`Session`]: Interactive game of a human against the greedy agent
//! - [`Arena`]: Parallel evaluation of the greedy agent against [`Optimal`]

mod arena;
mod human;
mod session;

pub use arena::*;
pub use human::*;
pub use session::*;

use crate::*;
use colored::Colorize;

/// One line per heap, sticks drawn as asterisks.
pub fn render(heaps: &Heaps) -> String {
    heaps
        .iter()
        .enumerate()
        .map(|(i, size)| {
            format!(
                "  heap {}: {} ({})",
                i + 1,
                "*".repeat(size as usize).as_str().yellow(),
                size
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
