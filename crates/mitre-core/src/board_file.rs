//! Board file parsing and serialization for [`Board`].
//!
//! A board file has three lines:
//!
//! ```text
//! 5
//! Bb5, Bd4, Bc1, Kc5
//! Bc3, Be3, Kb3
//! ```
//!
//! The board size, then the white pieces, then the black pieces. Each piece
//! is a kind letter (`K` or `B`) followed by a square label.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::error::BoardFileError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl FromStr for Board {
    type Err = BoardFileError;

    fn from_str(text: &str) -> Result<Board, BoardFileError> {
        let mut lines = text.lines();
        let mut next_line = |line: usize| lines.next().ok_or(BoardFileError::MissingLine { line });

        let size_str = next_line(1)?.trim();
        let size = size_str
            .parse::<u32>()
            .ok()
            .filter(|&s| s > 0)
            .ok_or_else(|| BoardFileError::BadSize {
                found: size_str.to_string(),
            })?;

        let mut pieces = Vec::new();
        for (line, color) in [(2, Color::White), (3, Color::Black)] {
            for entry in next_line(line)?.split(',').map(str::trim) {
                if entry.is_empty() {
                    continue;
                }
                pieces.push(parse_entry(entry, color)?);
            }
        }

        let board = Board::new(size, pieces)?;
        Ok(board)
    }
}

/// Parse one `<KindLetter><Location>` entry.
fn parse_entry(entry: &str, color: Color) -> Result<Piece, BoardFileError> {
    let mut chars = entry.chars();
    let kind = chars
        .next()
        .and_then(PieceKind::from_letter)
        .ok_or_else(|| BoardFileError::BadEntry {
            entry: entry.to_string(),
        })?;
    let square = Square::parse(chars.as_str())?;
    Ok(Piece::new(kind, color, square))
}

impl fmt::Display for Board {
    /// Write the board in board file format, newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size())?;
        for color in Color::ALL {
            let entries: Vec<String> = self.pieces_of(color).map(|p| p.to_string()).collect();
            writeln!(f, "{}", entries.join(", "))?;
        }
        Ok(())
    }
}

/// Load a board from a board file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, BoardFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let board: Board = text.parse()?;
    debug!(path = %path.display(), size = board.size(), pieces = board.pieces().len(), "board loaded");
    Ok(board)
}

/// Save a board to a board file, replacing any existing file.
pub fn write_board(path: impl AsRef<Path>, board: &Board) -> Result<(), BoardFileError> {
    let path = path.as_ref();
    fs::write(path, board.to_string())?;
    debug!(path = %path.display(), "board saved");
    Ok(())
}
