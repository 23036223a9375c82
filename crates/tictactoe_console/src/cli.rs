//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::Mark;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with console settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mark that moves first (X or O), overriding the config file
    #[arg(long)]
    pub first: Option<Mark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.first.is_none());
    }

    #[test]
    fn test_first_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "--first", "o"]).unwrap();
        assert_eq!(cli.first, Some(Mark::O));
        assert!(Cli::try_parse_from(["tictactoe", "--first", "q"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
