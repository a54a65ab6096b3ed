//! Error types for labels, board validation, board files and rule queries.

use crate::color::Color;
use crate::square::Square;

/// A square label that is not letters followed by a positive rank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The label does not describe a square.
    #[error("invalid location: \"{label}\"")]
    InvalidLocation {
        /// The rejected label.
        label: String,
    },
}

/// Errors from structural validation of a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board size is zero.
    #[error("board size must be at least 1")]
    BadSize,
    /// A piece stands outside the board.
    #[error("piece on {square} is outside a {size}x{size} board")]
    OutOfBounds {
        /// The offending square.
        square: Square,
        /// The board size.
        size: u32,
    },
    /// Two pieces claim the same square.
    #[error("two pieces on {square}")]
    DuplicateSquare {
        /// The shared square.
        square: Square,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {}, found {count}", .color.name())]
    InvalidKingCount {
        /// The side with the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
}

/// Errors that occur when reading or writing a board file.
#[derive(Debug, thiserror::Error)]
pub enum BoardFileError {
    /// The file could not be opened, read or written.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
    /// One of the three lines is absent.
    #[error("missing line {line}")]
    MissingLine {
        /// 1-based line number.
        line: usize,
    },
    /// The first line is not a positive integer.
    #[error("invalid board size: \"{found}\"")]
    BadSize {
        /// The rejected text.
        found: String,
    },
    /// A piece entry is not a kind letter followed by a label.
    #[error("invalid piece entry: \"{entry}\"")]
    BadEntry {
        /// The rejected entry.
        entry: String,
    },
    /// A piece entry names an invalid square.
    #[error(transparent)]
    Location(#[from] SquareError),
    /// The pieces parse but do not form a valid board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from check, checkmate and stalemate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The side being examined has no king on the board.
    #[error("could not find a {} king on the board", .color.name())]
    MissingKing {
        /// The side without a king.
        color: Color,
    },
}
