//! Console front end for two-player tic-tac-toe.
//!
//! Provides [`ConsoleInterface`], a [`tictactoe::UserInterface`] over any
//! line reader and writer, and [`ConsoleConfig`] for its settings.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{GameLoop, Mark, Outcome};
//! use tictactoe_console::{ConsoleConfig, ConsoleInterface};
//!
//! let moves = "0 0\n0 1\n1 0\n1 1\n2 0\n";
//! let ui = ConsoleInterface::new(Cursor::new(moves), Vec::new(), &ConsoleConfig::default());
//! let outcome = GameLoop::new(ui, Mark::X).run().unwrap();
//! assert_eq!(outcome, Outcome::Winner(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub use config::{ConfigError, ConsoleConfig};
pub use console::{ConsoleInterface, parse_turn};
