//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here
//! mutates the board or remembers anything between calls.

mod draw;
mod turn;
mod win;

pub use draw::has_draw;
pub use turn::{TurnError, check_turn, is_valid_turn};
pub use win::{has_winner, winner};
