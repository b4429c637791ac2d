use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Remove `amount` sticks from the heap at index `heap`.
///
/// A take is only meaningful relative to the [`Heaps`] it was drawn from;
/// the same take may be illegal on another board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Take {
    heap: usize,
    amount: Sticks,
}

impl Take {
    pub const fn new(heap: usize, amount: Sticks) -> Self {
        Self { heap, amount }
    }
    /// Zero-based heap index.
    pub const fn heap(&self) -> usize {
        self.heap
    }
    pub const fn amount(&self) -> Sticks {
        self.amount
    }
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from heap {}", self.amount, self.heap + 1)
    }
}
