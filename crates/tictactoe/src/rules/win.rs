//! Win detection.

use crate::board::{Board, WinningLine};
use crate::types::Mark;
use tracing::{debug, instrument};

/// Returns the mark holding all three cells of `line`, if one does.
fn line_owner(board: &Board, line: &WinningLine) -> Option<Mark> {
    let mut candidate = None;
    for &coord in line.cells() {
        let mark = board.get(coord)?;
        match candidate {
            None => candidate = Some(mark),
            Some(held) if held != mark => return None,
            Some(_) => {}
        }
    }
    candidate
}

/// Returns the mark that completed a winning line, if any.
///
/// Lines are scanned in table order and the first complete one wins. On a
/// board reached through legal play at most one mark can own a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    board.winning_lines().iter().find_map(|line| {
        let mark = line_owner(board, line)?;
        debug!(%mark, kind = %line.kind(), cells = ?line.cells(), "Line completed");
        Some(mark)
    })
}

/// Returns true if any winning line is fully held by one mark.
pub fn has_winner(board: &Board) -> bool {
    winner(board).is_some()
}
