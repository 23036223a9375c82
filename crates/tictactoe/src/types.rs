//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells along each side of the board.
pub const SIZE: usize = 3;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// First player's mark.
    #[serde(alias = "x")]
    X,
    /// Second player's mark.
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A coordinate known to lie on the board.
///
/// `x` is the column and `y` the row, both in `0..SIZE`. The only public
/// constructor is [`Coord::new`], which rejects anything off the board, so a
/// `Coord` can always index the board directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` if either axis is outside `0..SIZE`.
    pub fn new(x: i64, y: i64) -> Option<Self> {
        let x = usize::try_from(x).ok().filter(|x| *x < SIZE)?;
        let y = usize::try_from(y).ok().filter(|y| *y < SIZE)?;
        Some(Self { x, y })
    }

    /// Builds a coordinate from values already known to be in range.
    pub(crate) const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Iterates every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coord::at(x, y)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move proposed by the current player.
///
/// Nothing about a `Turn` is checked on construction: the coordinates may lie
/// off the board or name an occupied cell. See [`crate::check_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Turn {
    /// Requested column.
    pub x: i64,
    /// Requested row.
    pub y: i64,
}

impl Turn {
    /// Returns the board coordinate this turn targets, if it is on the board.
    pub fn coord(&self) -> Option<Coord> {
        Coord::new(self.x, self.y)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn(x: {}, y: {})", self.x, self.y)
    }
}
