mod app;
mod console_io;
mod menu;

use std::io;

use clap::{Parser, ValueEnum};
use common::config::{GameConfig, Validate, default_config_path};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, FirstPlayerMode, OpponentMode, SessionError};
use common::{log, logger};

use console_io::{ConsoleBroadcaster, Prompter};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpponentArg {
    Computer,
    Human,
}

impl From<OpponentArg> for OpponentMode {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Computer => OpponentMode::Computer,
            OpponentArg::Human => OpponentMode::Human,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Random,
    Optimal,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Random => Difficulty::Random,
            DifficultyArg::Optimal => Difficulty::Optimal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Random,
    X,
    O,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Random => FirstPlayerMode::Random,
            FirstPlayerArg::X => FirstPlayerMode::X,
            FirstPlayerArg::O => FirstPlayerMode::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,
    /// Only used against the computer
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,
    /// Seed for first-player choice and random moves
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(opponent) = self.opponent {
            config.opponent = Some(opponent.into());
            if opponent == OpponentArg::Human {
                config.difficulty = None;
            }
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = Some(difficulty.into());
        }
        if let Some(first) = self.first {
            config.first_player = first.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.use_log_prefix && config.log.prefix.is_none() {
            config.log.prefix = Some("TicTacToe".to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let manager = GameConfig::manager(&config_path);
    let mut config = manager.get_config()?;
    args.apply(&mut config);
    config.validate()?;

    if args.save_config {
        manager.set_config(&config)?;
    }

    logger::init_logger(config.log.prefix.clone(), config.log.sink, config.log.file.as_deref())?;
    log!("Config: {} ({:?})", config_path, config);

    let mut rng = SessionRng::from_seed_or_random(config.seed);
    log!("Session seed: {}", rng.seed());

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut broadcaster = ConsoleBroadcaster::new(io::stdout());

    match app::play(&config, &mut prompter, &mut broadcaster, &mut rng) {
        Ok(games) => {
            log!("Played {} game(s)", games);
            Ok(())
        }
        Err(SessionError::InputClosed) => {
            log!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
