//! The board: its size and the pieces standing on it.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A square board of `size` x `size` squares and the pieces on it.
///
/// The board owns its pieces outright. Cloning a board produces pieces with
/// the same kind, color and square but no shared identity, so a clone can be
/// mutated freely while simulating a move.
///
/// Pieces keep the order they were given in. That order is significant:
/// every board-wide search visits pieces in it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: u32,
    pieces: Vec<Piece>,
}

impl Board {
    /// Build a board and validate it.
    pub fn new(size: u32, pieces: Vec<Piece>) -> Result<Board, BoardError> {
        let board = Board { size, pieces };
        board.validate()?;
        Ok(board)
    }

    /// Build a board without validation.
    ///
    /// Queries on such a board are well defined; check detection reports
    /// [`RulesError::MissingKing`](crate::RulesError::MissingKing) when a
    /// king is absent.
    pub fn from_pieces_unchecked(size: u32, pieces: Vec<Piece>) -> Board {
        Board { size, pieces }
    }

    /// Return the board size (files and ranks per side).
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Return all pieces in board order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterate over the pieces of one side in board order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color() == color)
    }

    /// Return the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square() == sq)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Return `true` if `sq` lies on this board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.is_within(self.size)
    }

    /// Return the square of the king for the given side, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.square())
    }

    /// Remove and return the piece on `sq`.
    pub(crate) fn remove_at(&mut self, sq: Square) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.square() == sq)?;
        Some(self.pieces.remove(idx))
    }

    /// Move whatever stands on `from` to `to`, without any rule checks.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.pieces.iter_mut().find(|p| p.square() == from) {
            piece.set_square(to);
        }
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 {
            return Err(BoardError::BadSize);
        }

        for (i, piece) in self.pieces.iter().enumerate() {
            let square = piece.square();
            if !self.contains(square) {
                return Err(BoardError::OutOfBounds {
                    square,
                    size: self.size,
                });
            }
            if self.pieces[..i].iter().any(|p| p.square() == square) {
                return Err(BoardError::DuplicateSquare { square });
            }
        }

        // Check exactly one king per side
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count,
                });
            }
        }

        Ok(())
    }

    /// Return a wrapper that renders the board with Unicode chess glyphs.
    pub fn unicode(&self) -> UnicodeBoard<'_> {
        UnicodeBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("pieces", &self.pieces)
            .finish()
    }
}

/// Renders a board one line per rank, highest rank first, one glyph per
/// file and a space for an empty square. Every line ends with a newline.
pub struct UnicodeBoard<'a>(&'a Board);

impl fmt::Display for UnicodeBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (1..=board.size).rev() {
            for file in 1..=board.size {
                let c = board
                    .piece_at(Square::new(file, rank))
                    .map_or(' ', |p| p.glyph());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
