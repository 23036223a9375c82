//! Boundary between the game loop and whatever presents it to players.

use super::board::Board;
use super::error::ErrorLocation;
use super::types::{Mark, Turn};
use derive_more::{Display, Error};
use tracing::instrument;

/// Display and input capability consumed by [`GameLoop`](crate::GameLoop).
///
/// Implementations own all formatting and text parsing. Display methods are
/// notifications only and must leave the board untouched.
pub trait UserInterface {
    /// Shows the current board.
    fn display_board(&mut self, board: &Board) -> Result<(), InterfaceError>;

    /// Blocks until the player for `mark` supplies a well-formed turn.
    ///
    /// Malformed input is handled here, by asking again. The returned turn
    /// may still be off the board or target an occupied cell.
    fn next_turn(&mut self, mark: Mark) -> Result<Turn, InterfaceError>;

    /// Announces that `mark` has won.
    fn display_winner_message(&mut self, mark: Mark) -> Result<(), InterfaceError>;

    /// Announces a draw.
    fn display_draw_message(&mut self) -> Result<(), InterfaceError>;

    /// Reports that `turn` was rejected.
    fn display_invalid_turn_message(&mut self, turn: Turn) -> Result<(), InterfaceError>;
}

/// Fault in the interface itself, such as closed input.
///
/// Not recoverable by the game loop.
#[derive(Debug, Clone, Display, Error)]
#[display("Interface error: {} at {}", message, location)]
pub struct InterfaceError {
    /// Error message.
    pub message: String,
    /// Where the error was raised.
    pub location: ErrorLocation,
}

impl InterfaceError {
    /// Creates a new interface error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<std::io::Error> for InterfaceError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_caller_location() {
        let (err, line) = (InterfaceError::new("closed"), line!());
        assert_eq!(err.location, ErrorLocation { file: file!(), line });
        assert_eq!(
            err.to_string(),
            format!("Interface error: closed at {}:{}", file!(), line)
        );
    }

    #[test]
    fn test_io_error_location_is_conversion_site() {
        let io = std::io::Error::other("broken pipe");
        let (err, line) = (InterfaceError::from(io), line!());
        assert_eq!(err.location.line, line);
        assert_eq!(err.location.file, file!());
        assert!(err.message.contains("broken pipe"));
    }
}
