use super::*;
use std::time::Duration;
use std::time::Instant;

/// Tally of episode outcomes over some span of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    learner: usize,
    opponent: usize,
    degenerate: usize,
    start: Instant,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            learner: 0,
            opponent: 0,
            degenerate: 0,
            start: Instant::now(),
        }
    }
}

impl Progress {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::LearnerWon => self.learner += 1,
            Outcome::OpponentWon => self.opponent += 1,
            Outcome::Degenerate => self.degenerate += 1,
            Outcome::Ongoing => unreachable!("recorded an unfinished episode"),
        }
    }
    pub fn episodes(&self) -> usize {
        self.learner + self.opponent + self.degenerate
    }
    pub fn learner_wins(&self) -> usize {
        self.learner
    }
    pub fn opponent_wins(&self) -> usize {
        self.opponent
    }
    pub fn degenerate(&self) -> usize {
        self.degenerate
    }
    /// Fraction of episodes the learner won.
    pub fn win_rate(&self) -> Probability {
        self.learner as Probability / self.episodes().max(1) as Probability
    }
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
    /// Aligned columns with episode throughput.
    pub fn format(&self) -> String {
        let rate = self.episodes() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<16}{:<16}{:<16}{:<16}",
            format!("won {}", self.learner),
            format!("lost {}", self.opponent),
            format!("win {:.3}", self.win_rate()),
            format!("E/sec {:.0}", rate),
        )
    }
}
