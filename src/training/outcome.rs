use super::*;

/// Result of advancing an episode by one move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// The board still has sticks; the other seat moves next.
    Ongoing,
    /// The learner took the last stick.
    LearnerWon,
    /// The opponent took the last stick.
    OpponentWon,
    /// The episode started on an empty board and nobody moved.
    Degenerate,
}

impl Outcome {
    /// The terminal reward credited to every learner move of the episode.
    /// `None` while the episode is still running.
    pub fn reward(&self) -> Option<Utility> {
        match self {
            Self::Ongoing => None,
            Self::LearnerWon => Some(REWARD_WIN),
            Self::OpponentWon => Some(REWARD_LOSS),
            Self::Degenerate => Some(REWARD_NONE),
        }
    }
    pub fn is_over(&self) -> bool {
        *self != Self::Ongoing
    }
    /// The seat that took the last stick.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::LearnerWon => Some(Seat::Learner),
            Self::OpponentWon => Some(Seat::Opponent),
            _ => None,
        }
    }
}

impl From<Seat> for Outcome {
    /// Whoever empties the board wins.
    fn from(mover: Seat) -> Self {
        match mover {
            Seat::Learner => Self::LearnerWon,
            Seat::Opponent => Self::OpponentWon,
        }
    }
}
