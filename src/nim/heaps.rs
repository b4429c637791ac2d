use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Board state: one stick count per heap, in a fixed order.
///
/// The all-zero board is the unique terminal state for a given heap count.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heaps(Vec<Sticks>);

impl Heaps {
    /// Draws each of `count` heaps uniformly from `1..=max`.
    pub fn sample<R>(count: usize, max: Sticks, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        debug_assert!(max >= 1);
        Self((0..count).map(|_| rng.random_range(1..=max)).collect())
    }
    /// Every legal take, by increasing heap index then increasing amount.
    /// Empty exactly when the board is terminal.
    pub fn choices(&self) -> Vec<Take> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| (1..=size).map(move |amount| Take::new(heap, amount)))
            .collect()
    }
    /// The board after `take`. Panics if `take` is not one of `choices()`.
    pub fn apply(&self, take: Take) -> Self {
        let size = self.0.get(take.heap()).copied().unwrap_or_default();
        assert!(
            take.amount() >= 1 && take.amount() <= size,
            "illegal {} on {}",
            take,
            self
        );
        let mut next = self.0.clone();
        next[take.heap()] = size - take.amount();
        Self(next)
    }
    pub fn is_terminal(&self) -> bool {
        self.0.iter().all(|&size| size == 0)
    }
    /// Bitwise XOR of all heap sizes.
    pub fn nim_sum(&self) -> Sticks {
        self.0.iter().fold(0, |sum, &size| sum ^ size)
    }
    /// Total sticks left on the board.
    pub fn sticks(&self) -> usize {
        self.0.iter().map(|&size| size as usize).sum()
    }
    /// Validates a proposed take against this board.
    pub fn legal(&self, heap: usize, amount: Sticks) -> anyhow::Result<Take> {
        let size = self.0.get(heap).copied().ok_or_else(|| {
            anyhow::anyhow!("heap {} does not exist, choose 1-{}", heap + 1, self.0.len())
        })?;
        anyhow::ensure!(amount >= 1, "take at least one stick");
        anyhow::ensure!(
            amount <= size,
            "heap {} only has {} sticks",
            heap + 1,
            size
        );
        Ok(Take::new(heap, amount))
    }
    /// Number of heaps.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn size(&self, heap: usize) -> Sticks {
        self.0[heap]
    }
    pub fn iter(&self) -> impl Iterator<Item = Sticks> + '_ {
        self.0.iter().copied()
    }
    /// Every board with `count` heaps of at most `max` sticks each,
    /// including the terminal one.
    pub fn exhaust(count: usize, max: Sticks) -> Vec<Self> {
        (0..count).fold(vec![Self(vec![])], |boards, _| {
            boards
                .into_iter()
                .flat_map(|board| {
                    (0..=max).map(move |size| {
                        let mut next = board.0.clone();
                        next.push(size);
                        Self(next)
                    })
                })
                .collect()
        })
    }
}

impl From<Vec<Sticks>> for Heaps {
    fn from(sizes: Vec<Sticks>) -> Self {
        Self(sizes)
    }
}

impl<const N: usize> From<[Sticks; N]> for Heaps {
    fn from(sizes: [Sticks; N]) -> Self {
        Self(sizes.to_vec())
    }
}

impl std::fmt::Display for Heaps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sizes = self.0.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        write!(f, "({})", sizes.join(", "))
    }
}
