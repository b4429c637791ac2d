//! Nim Binary
//!
//! Train a Monte Carlo agent against the nim-sum opponent, then play it.
//!
//! Commands: train, play, evaluate, run (default: train, save, reload, play)

use anyhow::Context;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use nimbot::play::*;
use nimbot::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Train a value table and save it to disk", alias = "t")]
    Train {
        #[command(flatten)]
        training: Training,
        #[arg(long, default_value = MODEL_PATH)]
        model: PathBuf,
    },
    #[command(about = "Play against a saved value table", alias = "p")]
    Play {
        #[arg(long, default_value = MODEL_PATH)]
        model: PathBuf,
        #[arg(long, default_value_t = MAX_HEAP_SIZE)]
        max: Sticks,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Pit a saved value table against the optimal opponent", alias = "e")]
    Evaluate {
        #[arg(long, default_value = MODEL_PATH)]
        model: PathBuf,
        #[arg(long, default_value_t = MAX_HEAP_SIZE)]
        max: Sticks,
        #[arg(long, default_value_t = EVALUATION_GAMES)]
        games: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    #[command(about = "Train, save, reload and play in one go", alias = "r")]
    Run {
        #[command(flatten)]
        training: Training,
        #[arg(long, default_value = MODEL_PATH)]
        model: PathBuf,
    },
}

#[derive(Args, Clone, Copy)]
struct Training {
    #[arg(long, default_value_t = HEAP_COUNT)]
    heaps: usize,
    #[arg(long, default_value_t = MAX_HEAP_SIZE)]
    max: Sticks,
    #[arg(long, default_value_t = EPISODE_COUNT)]
    episodes: usize,
    #[arg(long, default_value_t = EPSILON_START)]
    epsilon_start: Probability,
    #[arg(long, default_value_t = EPSILON_MIN)]
    epsilon_min: Probability,
    #[arg(long, default_value_t = EPSILON_DECAY)]
    epsilon_decay: Probability,
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for Training {
    fn default() -> Self {
        let config = Config::default();
        Self {
            heaps: config.heaps,
            max: config.max,
            episodes: config.episodes,
            epsilon_start: config.epsilon_start,
            epsilon_min: config.epsilon_min,
            epsilon_decay: config.epsilon_decay,
            seed: config.seed,
        }
    }
}

impl From<Training> for Config {
    fn from(t: Training) -> Self {
        Self {
            heaps: t.heaps,
            max: t.max,
            episodes: t.episodes,
            epsilon_start: t.epsilon_start,
            epsilon_min: t.epsilon_min,
            epsilon_decay: t.epsilon_decay,
            seed: t.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    nimbot::log()?;
    let command = Cli::parse().command.unwrap_or(Command::Run {
        training: Training::default(),
        model: PathBuf::from(MODEL_PATH),
    });
    match command {
        Command::Train { training, model } => train(Config::from(training), &model).map(|_| ()),
        Command::Play { model, max, seed } => play(&model, max, seed),
        Command::Evaluate {
            model,
            max,
            games,
            seed,
        } => evaluate(&model, max, games, seed),
        Command::Run { training, model } => {
            let config = Config::from(training);
            train(config, &model)?;
            play(&model, config.max, config.seed)
        }
    }
}

fn train(config: Config, model: &Path) -> anyhow::Result<Table> {
    let mut trainer = Trainer::new(config)?;
    trainer.train();
    let table = trainer.into_table();
    table.save(model)?;
    Ok(table)
}

fn play(model: &Path, max: Sticks, seed: Option<u64>) -> anyhow::Result<()> {
    let table = trained(model)?;
    let ref mut rng = rng(seed);
    Session::new(&table, max)?.play(rng).map(|_| ())
}

fn evaluate(model: &Path, max: Sticks, games: usize, seed: u64) -> anyhow::Result<()> {
    let table = trained(model)?;
    let record = Arena::new(&table, max)?.evaluate(games, seed);
    println!("{}", record);
    Ok(())
}

fn trained(model: &Path) -> anyhow::Result<Table> {
    anyhow::ensure!(
        Table::done(model),
        "no table at {}, run `nimbot train` first",
        model.display()
    );
    Table::load(model).context("a trained table is required, run `nimbot train` first")
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
