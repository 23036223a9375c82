//! Turn-taking loop for a single game.

use super::board::Board;
use super::interface::{InterfaceError, UserInterface};
use super::rules;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting on the given mark to move.
    AwaitingTurn(Mark),
    /// The given mark completed a line.
    Won(Mark),
    /// Board filled with no line completed.
    Draw,
}

impl GameState {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::AwaitingTurn(_))
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Drives one game from an empty board to a win or a draw.
///
/// The loop owns its board for the whole game; the interface only ever sees
/// it by shared reference.
#[derive(Debug)]
pub struct GameLoop<U> {
    board: Board,
    ui: U,
    state: GameState,
}

impl<U: UserInterface> GameLoop<U> {
    /// Creates a game on an empty board with `first_player` to move.
    #[instrument(skip(ui))]
    pub fn new(ui: U, first_player: Mark) -> Self {
        Self {
            board: Board::new(),
            ui,
            state: GameState::AwaitingTurn(first_player),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the interface.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Consumes the loop, returning the interface.
    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Plays one request/response cycle with the current player.
    ///
    /// An invalid turn is reported and leaves both the board and the player
    /// to move unchanged. Calling this after the game has ended does nothing.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn step(&mut self) -> Result<GameState, InterfaceError> {
        let GameState::AwaitingTurn(mark) = self.state else {
            debug!("Game already over");
            return Ok(self.state);
        };

        self.ui.display_board(&self.board)?;

        let turn = self.ui.next_turn(mark)?;
        debug!(%mark, %turn, "Turn requested");

        let coord = match rules::check_turn(&self.board, turn) {
            Ok(coord) => coord,
            Err(e) => {
                warn!(%mark, error = %e, "Rejected turn");
                self.ui.display_invalid_turn_message(turn)?;
                return Ok(self.state);
            }
        };

        self.board.set_mark(coord, mark);
        debug!(%mark, %coord, "Mark placed");

        // A full board with a completed line is a win, so the winner check
        // has to come first.
        self.state = if rules::has_winner(&self.board) {
            self.ui.display_board(&self.board)?;
            self.ui.display_winner_message(mark)?;
            GameState::Won(mark)
        } else if rules::has_draw(&self.board) {
            self.ui.display_board(&self.board)?;
            self.ui.display_draw_message()?;
            GameState::Draw
        } else {
            GameState::AwaitingTurn(mark.opponent())
        };

        Ok(self.state)
    }

    /// Runs the game to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, InterfaceError> {
        info!(state = ?self.state, "Game started");
        loop {
            let outcome = match self.step()? {
                GameState::AwaitingTurn(_) => continue,
                GameState::Won(mark) => Outcome::Winner(mark),
                GameState::Draw => Outcome::Draw,
            };
            info!(%outcome, "Game finished");
            return Ok(outcome);
        }
    }
}
