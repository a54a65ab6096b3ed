//! Turn input parsing.

use mitre_core::{Move, SquareError};

/// One line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move.
    Move(Move),
    /// Save the board and stop.
    Quit,
}

/// Parse a line of turn input. `quit_word` is matched exactly, after
/// trimming surrounding whitespace.
pub fn parse_command(line: &str, quit_word: &str) -> Result<Command, SquareError> {
    let line = line.trim();
    if line == quit_word {
        return Ok(Command::Quit);
    }
    Move::parse(line).map(Command::Move)
}
