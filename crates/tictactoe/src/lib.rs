//! Two-player tic-tac-toe on a fixed 3x3 board.
//!
//! # Architecture
//!
//! - **Board**: cell storage plus the constant table of winning lines
//! - **Rules**: pure turn validation, win and draw detection
//! - **GameLoop**: turn order and the AwaitingTurn → Won / Draw state machine
//! - **UserInterface**: the display/input capability a front end provides
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Coord, Mark, has_winner, is_valid_turn, Turn};
//!
//! let mut board = Board::new();
//! assert!(is_valid_turn(&board, Turn::new(1, 1)));
//! assert!(!is_valid_turn(&board, Turn::new(3, 1)));
//!
//! for x in 0..3 {
//!     board.set_mark(Coord::new(x, 0).unwrap(), Mark::X);
//! }
//! assert!(has_winner(&board));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod interface;
mod rules;
mod types;

pub use board::{Board, LineKind, WINNING_LINES, WinningLine};
pub use error::ErrorLocation;
pub use game::{GameLoop, GameState, Outcome};
pub use interface::{InterfaceError, UserInterface};
pub use rules::{TurnError, check_turn, has_draw, has_winner, is_valid_turn, winner};
pub use types::{Coord, Mark, SIZE, Turn};
