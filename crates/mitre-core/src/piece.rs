//! A piece standing on a square.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored piece together with its current square.
///
/// Kind and color are fixed at creation; only the square changes, and only
/// through [`Piece::move_to`](crate::Piece::move_to) on the board that owns
/// the piece. Pieces are plain values, so a cloned [`Board`](crate::Board)
/// never shares a piece with the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Piece {
    /// Create a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece { kind, color, square }
    }

    /// Shorthand for a king.
    #[inline]
    pub const fn king(color: Color, square: Square) -> Piece {
        Piece::new(PieceKind::King, color, square)
    }

    /// Shorthand for a bishop.
    #[inline]
    pub const fn bishop(color: Color, square: Square) -> Piece {
        Piece::new(PieceKind::Bishop, color, square)
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the side this piece plays for.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the square the piece stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Return the Unicode chess glyph for this piece.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Bishop) => '♝',
        }
    }
}

impl fmt::Display for Piece {
    /// Board file notation: kind letter followed by the square label (`Kc5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.square)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}@{}", color_prefix, self.kind.letter(), self.square)
    }
}
