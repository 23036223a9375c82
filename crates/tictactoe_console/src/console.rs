//! Line-oriented console front end.

use super::config::ConsoleConfig;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tictactoe::{Board, InterfaceError, Mark, Turn, UserInterface};
use tracing::{debug, instrument};

/// Parses a turn of the form `"x y"`.
///
/// Pieces are separated by spaces (runs of spaces are tolerated) and each must
/// be a signed integer. Anything else, including a third piece, is rejected.
pub fn parse_turn(line: &str) -> Option<Turn> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut pieces = line.split(' ').filter(|piece| !piece.is_empty());

    let x = pieces.next()?.parse().ok()?;
    let y = pieces.next()?.parse().ok()?;
    if pieces.next().is_some() {
        return None;
    }
    Some(Turn::new(x, y))
}

/// Plays over a text reader and writer.
#[derive(Debug)]
pub struct ConsoleInterface<R, W> {
    input: R,
    output: W,
    placeholder: char,
}

impl ConsoleInterface<StdinLock<'static>, Stdout> {
    /// Creates an interface on the process's stdin and stdout.
    pub fn stdio(config: &ConsoleConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    /// Creates an interface over arbitrary input and output.
    pub fn new(input: R, output: W, config: &ConsoleConfig) -> Self {
        Self {
            input,
            output,
            placeholder: *config.placeholder(),
        }
    }

    /// Consumes the interface, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, failing once the input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so such a
    /// line reaches the parser and is re-prompted like any other bad input.
    fn read_line(&mut self) -> Result<String, InterfaceError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InterfaceError::new("Input closed while waiting for a turn"));
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleInterface<R, W> {
    fn display_board(&mut self, board: &Board) -> Result<(), InterfaceError> {
        writeln!(self.output)?;
        write!(self.output, "{}", board.render(self.placeholder))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn next_turn(&mut self, mark: Mark) -> Result<Turn, InterfaceError> {
        writeln!(self.output, "Current player: {}", mark)?;
        loop {
            writeln!(self.output, "Enter your next turn ('x y') :")?;
            self.output.flush()?;

            let line = self.read_line()?;
            if let Some(turn) = parse_turn(&line) {
                return Ok(turn);
            }

            let raw = line.trim_end_matches(['\n', '\r']);
            debug!(input = raw, "Unparseable turn");
            writeln!(self.output, "{}: invalid input", raw)?;
        }
    }

    fn display_winner_message(&mut self, mark: Mark) -> Result<(), InterfaceError> {
        writeln!(self.output, "Winner: '{}'", mark)?;
        self.output.flush()?;
        Ok(())
    }

    fn display_draw_message(&mut self) -> Result<(), InterfaceError> {
        writeln!(self.output, "Draw")?;
        self.output.flush()?;
        Ok(())
    }

    fn display_invalid_turn_message(&mut self, turn: Turn) -> Result<(), InterfaceError> {
        writeln!(self.output, "{}: invalid turn", turn)?;
        Ok(())
    }
}
