//! A move from one square to another.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::square::Square;

/// A move as a `(source, dest)` pair.
///
/// Written as the two labels run together, e.g. `e2e4` or `a10b1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// Return the source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Parse a pair of labels, either run together (`e2e4`, `a10b10`) or
    /// separated by whitespace (`e2 e4`).
    ///
    /// A run-together pair is split where a rank digit is followed by a file
    /// letter, which is unambiguous for ranks of any length.
    pub fn parse(text: &str) -> Result<Move, SquareError> {
        let text = text.trim();
        let mut parts = text.split_whitespace();
        let (source, dest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(dest), None) => (source, dest),
            (Some(pair), None, None) => {
                let bytes = pair.as_bytes();
                let split = (1..bytes.len())
                    .find(|&i| bytes[i - 1].is_ascii_digit() && bytes[i].is_ascii_alphabetic())
                    .ok_or_else(|| SquareError::InvalidLocation {
                        label: pair.to_string(),
                    })?;
                pair.split_at(split)
            }
            _ => {
                return Err(SquareError::InvalidLocation {
                    label: text.to_string(),
                });
            }
        };
        Ok(Move::new(Square::parse(source)?, Square::parse(dest)?))
    }
}

impl FromStr for Move {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Move, SquareError> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
