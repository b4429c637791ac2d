use rand::Rng;

/// Who moves next. The learner is the agent whose values are estimated;
/// at play time the same seat is held by the trained agent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    Learner,
    Opponent,
}

impl Seat {
    pub fn other(&self) -> Self {
        match self {
            Self::Learner => Self::Opponent,
            Self::Opponent => Self::Learner,
        }
    }
    /// Either seat with equal probability.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            Self::Learner
        } else {
            Self::Opponent
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Learner => write!(f, "learner"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}
