//! Tabular Monte Carlo control for the game of Nim.
//!
//! A learner is trained by first-visit Monte Carlo control against an
//! opponent that always restores a zero nim-sum when it can. The learner is
//! never told the theory of the game; it only sees terminal rewards.
//!
//! # Module Structure
//!
//! - `nim`: Game environment (Heaps, Take)
//! - `policy`: Move selection (Optimal, Greedy, EpsilonGreedy)
//! - `table`: Action values, visit counts, persistence
//! - `training`: Episodes, epsilon schedule, Trainer
//! - `play`: Interactive play and evaluation (requires `cli` feature)
pub mod nim;
#[cfg(feature = "cli")]
pub mod play;
pub mod policy;
pub mod table;
pub mod training;

pub use nim::*;
pub use policy::*;
pub use table::*;
pub use training::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Action-value estimates and terminal rewards.
pub type Utility = f64;
/// Exploration rates.
pub type Probability = f64;
/// Number of sticks in a single heap.
pub type Sticks = u8;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of heaps on the board.
pub const HEAP_COUNT: usize = 3;
/// Initial heap sizes are drawn uniformly from 1..=MAX_HEAP_SIZE.
pub const MAX_HEAP_SIZE: Sticks = 5;

// ============================================================================
// MONTE CARLO CONTROL
// Epsilon after n episodes: max(EPSILON_MIN, EPSILON_START · EPSILON_DECAY^n)
// ============================================================================
/// Total training budget in episodes.
pub const EPISODE_COUNT: usize = 30000;
/// Exploration rate of the first episode.
pub const EPSILON_START: Probability = 1.0;
/// Exploration never decays below this floor.
pub const EPSILON_MIN: Probability = 0.001;
/// Multiplicative decay applied once per episode.
pub const EPSILON_DECAY: Probability = 0.99;
/// Reward when the learner takes the last stick.
pub const REWARD_WIN: Utility = 1.0;
/// Reward when the opponent takes the last stick.
pub const REWARD_LOSS: Utility = -1.0;
/// Reward for an episode that starts on an empty board.
pub const REWARD_NONE: Utility = 0.0;

// ============================================================================
// RUNTIME
// ============================================================================
/// Episodes between progress log lines.
pub const PROGRESS_INTERVAL: usize = 5000;
/// Games played by the evaluation arena.
pub const EVALUATION_GAMES: usize = 10000;
/// Default file name of the persisted value table.
pub const MODEL_PATH: &str = "nim.json";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
