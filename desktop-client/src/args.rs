use clap::{Parser, ValueEnum};
use common::games::tictactoe::GameMode;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    OnePlayer,
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::OnePlayer => GameMode::OnePlayer,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against the computer or a friend")]
pub struct Args {
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Games per session before the scores reset.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_games: Option<u32>,

    /// Seed for the computer's random moves.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub use_log_prefix: bool,
}

impl Args {
    /// Command line values win over the config file.
    pub fn apply_to(&self, config: Config) -> Config {
        let mode_changed = self.mode.is_some_and(|m| GameMode::from(m) != config.mode);
        let mode = self.mode.map(GameMode::from).unwrap_or(config.mode);
        let max_games = match self.max_games {
            Some(max_games) => Some(max_games),
            None if mode_changed => None,
            None => config.max_games,
        };
        Config {
            mode,
            max_games,
            seed: self.seed.or(config.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("tictactoe").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_keep_config() {
        let args = parse(&[]).unwrap();
        let config = Config {
            mode: GameMode::TwoPlayer,
            max_games: Some(6),
            seed: Some(1),
        };
        assert_eq!(args.apply_to(config.clone()), config);
    }

    #[test]
    fn test_arguments_override_config() {
        let args = parse(&["--mode", "two-player", "--max-games", "3", "--seed", "77"]).unwrap();
        let config = args.apply_to(Config::default());
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.max_games, Some(3));
        assert_eq!(config.seed, Some(77));
    }

    #[test]
    fn test_switching_mode_drops_stored_limit() {
        let args = parse(&["--mode", "one-player"]).unwrap();
        let stored = Config {
            mode: GameMode::TwoPlayer,
            max_games: Some(10),
            seed: None,
        };
        let config = args.apply_to(stored);
        assert_eq!(config.mode, GameMode::OnePlayer);
        assert_eq!(config.effective_max_games(), 20);
    }

    #[test]
    fn test_zero_max_games_is_rejected() {
        assert!(parse(&["--max-games", "0"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(parse(&["--mode", "three-player"]).is_err());
    }
}
