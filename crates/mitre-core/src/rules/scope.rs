//! Compile-time lookahead depth for move legality.
//!
//! Legality and check detection call each other: a move is legal if it does
//! not leave the mover in check, and a king is in check if an opposing piece
//! has a legal move onto it. The scopes cut that cycle at a fixed depth:
//!
//! - [`Full`]: a move by the side to act. After simulating it, the mover is
//!   in check if any opposing piece has a [`Reply`]-legal move onto the king.
//! - [`Reply`]: an opposing reply inside a `Full` check. After simulating
//!   it, the replying side is exposed only if some piece *reaches* its king.
//!   No further simulation happens.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Marker trait for compile-time lookahead dispatch.
pub(crate) trait Scope {
    /// Whether `attacker` counts as threatening the king on `king` once a
    /// move at this scope has been simulated onto `board`.
    fn threatens(attacker: &Piece, king: Square, board: &Board) -> bool;
}

/// Zero-sized type for a move by the side to act.
pub(crate) struct Full;
impl Scope for Full {
    fn threatens(attacker: &Piece, king: Square, board: &Board) -> bool {
        attacker.legal_in::<Reply>(king, board)
    }
}

/// Zero-sized type for an opposing reply, one ply below [`Full`].
pub(crate) struct Reply;
impl Scope for Reply {
    fn threatens(attacker: &Piece, king: Square, board: &Board) -> bool {
        attacker.admissible(king, board)
    }
}
