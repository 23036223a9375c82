//! The 3x3 board and its fixed table of winning lines.

use super::types::{Coord, Mark, SIZE};
use std::fmt;
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LineKind {
    /// Corner to corner through the center.
    Diagonal,
    /// A single column.
    Column,
    /// A single row.
    Row,
}

/// Three cells whose uniform occupation wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    kind: LineKind,
    cells: [Coord; 3],
}

impl WinningLine {
    const fn new(kind: LineKind, cells: [(usize, usize); 3]) -> Self {
        Self {
            kind,
            cells: [
                Coord::at(cells[0].0, cells[0].1),
                Coord::at(cells[1].0, cells[1].1),
                Coord::at(cells[2].0, cells[2].1),
            ],
        }
    }

    /// Orientation of the line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells making up the line.
    pub fn cells(&self) -> &[Coord; 3] {
        &self.cells
    }
}

/// Every way to win, as `(x, y)` triples.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Diagonals
    WinningLine::new(LineKind::Diagonal, [(0, 0), (1, 1), (2, 2)]),
    WinningLine::new(LineKind::Diagonal, [(2, 0), (1, 1), (0, 2)]),
    // Columns
    WinningLine::new(LineKind::Column, [(0, 0), (0, 1), (0, 2)]),
    WinningLine::new(LineKind::Column, [(1, 0), (1, 1), (1, 2)]),
    WinningLine::new(LineKind::Column, [(2, 0), (2, 1), (2, 2)]),
    // Rows
    WinningLine::new(LineKind::Row, [(0, 0), (1, 0), (2, 0)]),
    WinningLine::new(LineKind::Row, [(0, 1), (1, 1), (2, 1)]),
    WinningLine::new(LineKind::Row, [(0, 2), (1, 2), (2, 2)]),
];

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major (`cells[y][x]`). The only way to write a cell
/// is [`Board::set_mark`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `coord`.
    ///
    /// The cell must be empty; marks are never overwritten within a game.
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, coord: Coord, mark: Mark) {
        debug_assert!(self.is_empty(coord), "cell {coord} already occupied");
        self.cells[coord.y()][coord.x()] = Some(mark);
    }

    /// Returns true if no mark has been placed at `coord`.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Returns the mark at `coord`, if any.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.y()][coord.x()]
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Mark>; SIZE]> {
        self.cells.iter()
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Mark>> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns the fixed set of winning lines.
    pub fn winning_lines(&self) -> &'static [WinningLine; 8] {
        &WINNING_LINES
    }

    /// Renders the board one row per line, each cell followed by a space.
    ///
    /// Empty cells are drawn as `placeholder`.
    pub fn render(&self, placeholder: char) -> String {
        let mut out = String::with_capacity(SIZE * (SIZE * 2 + 1));
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(mark) => out.push_str(&mark.to_string()),
                    None => out.push(placeholder),
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('_'))
    }
}
