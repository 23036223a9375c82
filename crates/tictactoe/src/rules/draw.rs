//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Returns true if every cell is occupied.
///
/// A full board may still contain a winning line, so callers must test for a
/// winner first.
#[instrument(skip(board))]
pub fn has_draw(board: &Board) -> bool {
    board.cells().all(|cell| cell.is_some())
}

#[cfg(test)]
mod tests {
    use super::super::has_winner;
    use super::*;
    use crate::types::{Coord, Mark};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!has_draw(&Board::new()));
    }

    #[test]
    fn test_one_empty_cell_not_draw() {
        for hole in Coord::all() {
            let mut board = Board::new();
            for coord in Coord::all().filter(|c| *c != hole) {
                board.set_mark(coord, Mark::X);
            }
            assert!(!has_draw(&board), "hole at {hole}");
        }
    }

    #[test]
    fn test_partial_board_with_winner_not_draw() {
        let mut board = Board::new();
        for x in 0..3 {
            board.set_mark(Coord::new(x, 0).unwrap(), Mark::O);
        }
        assert!(has_winner(&board));
        assert!(!has_draw(&board));
    }

    #[test]
    fn test_standard_draw() {
        // X O X
        // X O O
        // O X X
        let layout = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ];
        let mut board = Board::new();
        for (y, row) in layout.iter().enumerate() {
            for (x, mark) in row.iter().enumerate() {
                board.set_mark(Coord::new(x as i64, y as i64).unwrap(), *mark);
            }
        }
        assert!(has_draw(&board));
        assert!(!has_winner(&board));
    }

    #[test]
    fn test_full_board_with_line_is_also_full() {
        let mut board = Board::new();
        for coord in Coord::all() {
            board.set_mark(coord, Mark::X);
        }
        assert!(has_draw(&board));
        assert!(has_winner(&board));
    }
}
