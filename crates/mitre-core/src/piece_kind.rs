//! Piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
///
/// The set is closed: every rule in [`crate::rules`] matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Bishop,
}

impl PieceKind {
    /// Return the board file letter for this kind (`K` or `B`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Bishop => 'B',
        }
    }

    /// Parse a board file letter. Only uppercase letters are recognised.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'K' => Some(PieceKind::King),
            'B' => Some(PieceKind::Bishop),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "King"),
            PieceKind::Bishop => write!(f, "Bishop"),
        }
    }
}
