//! Move legality and move application.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::scope::{Full, Scope};

impl Piece {
    /// Return `true` if this piece may legally move to `target`.
    ///
    /// A legal move is not a null move, is reachable, does not land on a
    /// piece of the same side, does not put a king next to the opposing
    /// king, and does not leave the mover's own king in check. The check
    /// test runs on a cloned board; `board` is never modified.
    pub fn can_move_to(&self, target: Square, board: &Board) -> bool {
        self.legal_in::<Full>(target, board)
    }

    /// Apply the move to `target` if it is legal, capturing whatever stands
    /// there, and return the updated board.
    ///
    /// An illegal move is not an error: the board comes back unchanged.
    /// After a legal move this `Piece` value is stale; look the piece up
    /// again on the returned board.
    pub fn move_to(&self, target: Square, mut board: Board) -> Board {
        if !self.can_move_to(target, &board) {
            trace!(piece = ?self, %target, "illegal move ignored");
            return board;
        }
        let captured = apply(&mut board, self.square(), target);
        trace!(piece = ?self, %target, ?captured, "move applied");
        board
    }

    /// The cheap legality conditions that need no simulation.
    pub(crate) fn admissible(&self, target: Square, board: &Board) -> bool {
        if target == self.square() || board.piece_at(self.square()) != Some(self) {
            return false;
        }
        if !self.reaches(target, board) {
            return false;
        }
        if board
            .piece_at(target)
            .is_some_and(|p| p.color() == self.color())
        {
            return false;
        }
        // Kings may never end up adjacent
        if self.kind() == PieceKind::King
            && board
                .king_square(!self.color())
                .is_some_and(|k| k.king_distance(target) <= 1)
        {
            return false;
        }
        true
    }

    /// Legality at a given lookahead scope.
    pub(crate) fn legal_in<S: Scope>(&self, target: Square, board: &Board) -> bool {
        if !self.admissible(target, board) {
            return false;
        }
        let after = simulate(board, self.square(), target);
        !threatened::<S>(self.color(), &after)
    }
}

/// Move the piece on `from` to `to`, removing any piece captured there.
pub(crate) fn apply(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    let captured = board.remove_at(to);
    board.relocate(from, to);
    captured
}

/// Return a copy of `board` with the move applied. `board` is untouched.
pub(crate) fn simulate(board: &Board, from: Square, to: Square) -> Board {
    let mut after = board.clone();
    apply(&mut after, from, to);
    after
}

/// Return `true` if `color`'s king is threatened at scope `S`.
///
/// A side without a king cannot be threatened; this happens inside a
/// simulated reply that captures the king.
pub(crate) fn threatened<S: Scope>(color: Color, board: &Board) -> bool {
    match board.king_square(color) {
        Some(king) => board
            .pieces_of(!color)
            .any(|attacker| S::threatens(attacker, king, board)),
        None => false,
    }
}
