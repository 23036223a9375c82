//! Turn validation.

use crate::board::Board;
use crate::types::{Coord, Turn};
use tracing::{instrument, trace};

/// Why a turn was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// One or both coordinates lie off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Turn),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Coord),
}

impl std::error::Error for TurnError {}

/// Validates `turn` against `board`, returning the target cell on success.
///
/// Bounds are checked first; the board is only consulted for on-board turns.
#[instrument(skip(board))]
pub fn check_turn(board: &Board, turn: Turn) -> Result<Coord, TurnError> {
    let coord = turn.coord().ok_or(TurnError::OutOfBounds(turn))?;
    if !board.is_empty(coord) {
        return Err(TurnError::Occupied(coord));
    }
    trace!(%coord, "Turn accepted");
    Ok(coord)
}

/// Returns true if `turn` is on the board and targets an empty cell.
pub fn is_valid_turn(board: &Board, turn: Turn) -> bool {
    check_turn(board, turn).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn full_board() -> Board {
        let mut board = Board::new();
        for (i, coord) in Coord::all().enumerate() {
            board.set_mark(coord, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        board
    }

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::new();
        assert!(is_valid_turn(&board, Turn::new(0, 0)));
        assert!(is_valid_turn(&board, Turn::new(2, 2)));
    }

    #[test]
    fn test_out_of_bounds_rejected_on_any_board() {
        let turns = [
            Turn::new(-1, 0),
            Turn::new(0, -1),
            Turn::new(3, 1),
            Turn::new(1, 3),
            Turn::new(i64::MIN, i64::MAX),
        ];
        for board in [Board::new(), full_board()] {
            for turn in turns {
                assert_eq!(check_turn(&board, turn), Err(TurnError::OutOfBounds(turn)));
                assert!(!is_valid_turn(&board, turn));
            }
        }
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new();
        let center = Coord::new(1, 1).unwrap();
        board.set_mark(center, Mark::X);

        assert_eq!(check_turn(&board, Turn::new(1, 1)), Err(TurnError::Occupied(center)));
        assert!(is_valid_turn(&board, Turn::new(0, 1)));
    }

    #[test]
    fn test_check_turn_returns_target() {
        let board = Board::new();
        let coord = check_turn(&board, Turn::new(2, 0)).unwrap();
        assert_eq!((coord.x(), coord.y()), (2, 0));
    }
}
