//! Board coordinates and their human-readable labels.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;

/// A square on a board of any size, as a 1-based `(file, rank)` pair.
///
/// Labels are letters for the file followed by digits for the rank: `a1`,
/// `e2`, `m12`. Files past `z` continue as `aa`, `ab`, ... (bijective
/// base 26), so every file has exactly one label.
///
/// A `Square` says nothing about which board it belongs to; bounds are
/// checked against [`Board::size`](crate::Board::size).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u32,
    rank: u32,
}

impl Square {
    /// Create a square from a 1-based file and rank.
    #[inline]
    pub const fn new(file: u32, rank: u32) -> Square {
        Square { file, rank }
    }

    /// Return the 1-based file (`a` = 1).
    #[inline]
    pub const fn file(self) -> u32 {
        self.file
    }

    /// Return the 1-based rank.
    #[inline]
    pub const fn rank(self) -> u32 {
        self.rank
    }

    /// Return `true` if the square lies on a `size` x `size` board.
    #[inline]
    pub const fn is_within(self, size: u32) -> bool {
        self.file >= 1 && self.file <= size && self.rank >= 1 && self.rank <= size
    }

    /// Signed file and rank distance from `self` to `other`.
    #[inline]
    pub(crate) fn delta(self, other: Square) -> (i64, i64) {
        (
            i64::from(other.file) - i64::from(self.file),
            i64::from(other.rank) - i64::from(self.rank),
        )
    }

    /// Chebyshev distance: the number of king steps between two squares.
    #[inline]
    pub fn king_distance(self, other: Square) -> u32 {
        self.file.abs_diff(other.file).max(self.rank.abs_diff(other.rank))
    }

    /// Step by `(df, dr)`, returning `None` if that leaves the positive quadrant.
    #[inline]
    pub(crate) fn offset(self, df: i64, dr: i64) -> Option<Square> {
        let file = self.file.checked_add_signed(i32::try_from(df).ok()?)?;
        let rank = self.rank.checked_add_signed(i32::try_from(dr).ok()?)?;
        if file == 0 || rank == 0 {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Iterate over every square of a `size` x `size` board, file-major:
    /// a1, a2, ..., a`size`, b1, ...
    ///
    /// This is the canonical square order used by every board-wide search.
    pub fn all(size: u32) -> impl Iterator<Item = Square> {
        (1..=size).flat_map(move |file| (1..=size).map(move |rank| Square::new(file, rank)))
    }

    /// Parse a label such as `e2` or `a10`.
    pub fn parse(label: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidLocation {
            label: label.to_string(),
        };

        let split = label
            .find(|c: char| !c.is_ascii_lowercase())
            .ok_or_else(invalid)?;
        let (letters, digits) = label.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let file = letters.bytes().try_fold(0u32, |acc, b| {
            acc.checked_mul(26)?.checked_add(u32::from(b - b'a') + 1)
        });
        let rank = digits.parse::<u32>().ok().filter(|&r| r > 0);

        match (file, rank) {
            (Some(file), Some(rank)) => Ok(Square::new(file, rank)),
            _ => Err(invalid()),
        }
    }
}

/// Write the letters for a 1-based file.
fn write_file(f: &mut fmt::Formatter<'_>, file: u32) -> fmt::Result {
    let mut letters = Vec::new();
    let mut n = file;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    for c in letters.iter().rev() {
        write!(f, "{c}")?;
    }
    Ok(())
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::parse(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_file(f, self.file)?;
        write!(f, "{}", self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
