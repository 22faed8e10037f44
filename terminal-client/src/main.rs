mod app;
mod config;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_engine::{log, logger};
use tictactoe_engine::config::{ConfigError, Validate};
use tictactoe_engine::tictactoe::{Difficulty, GameMode, TicTacToeSession};

use app::TerminalApp;
use config::ClientConfigManager;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsComputer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Random,
    Heuristic,
    Optimal,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Random => Difficulty::Random,
            DifficultyArg::Heuristic => Difficulty::Heuristic,
            DifficultyArg::Optimal => Difficulty::Optimal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_terminal", about = "Play tic-tac-toe in the terminal")]
struct Args {
    #[arg(long, default_value = "tictactoe_config.yaml")]
    config: PathBuf,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    computer_delay_ms: Option<u64>,
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn resolve_mode(base: GameMode, mode: Option<ModeArg>, difficulty: Option<DifficultyArg>) -> GameMode {
    match (mode, difficulty) {
        (Some(ModeArg::TwoPlayer), _) => GameMode::TwoPlayer,
        (Some(ModeArg::VsComputer), None) => {
            GameMode::VsComputer(base.difficulty().unwrap_or(Difficulty::Optimal))
        }
        (_, Some(difficulty)) => GameMode::VsComputer(difficulty.into()),
        (None, None) => base,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Terminal".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = ClientConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    log!("Loaded config from {}", args.config.display());

    config.mode = resolve_mode(config.mode, args.mode, args.difficulty);
    if let Some(delay) = args.computer_delay_ms {
        config.computer_delay_ms = delay;
    }
    config.validate().map_err(ConfigError::Validation)?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config.display());
    }

    let session = match args.seed {
        Some(seed) => TicTacToeSession::with_seed(config.mode, seed),
        None => TicTacToeSession::new(config.mode),
    };
    log!("Starting game with seed {}", session.seed());

    let stdin = io::stdin();
    let mut app = TerminalApp::new(session, config, stdin.lock(), io::stdout());
    app.run()?;

    Ok(())
}
