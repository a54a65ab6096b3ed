//! Check, checkmate and stalemate detection.

use crate::board::Board;
use crate::color::Color;
use crate::error::RulesError;
use crate::square::Square;

use super::legality::threatened;
use super::scope::Full;

/// The state of a game from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, and at least one legal move exists.
    Ongoing,
    /// In check, with at least one escape.
    Check,
    /// In check with no escape.
    Checkmate,
    /// Not in check, but no legal move exists.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Return `true` if `color`'s king is in check: some opposing piece has a
/// legal move onto the king's square.
pub fn is_in_check(color: Color, board: &Board) -> Result<bool, RulesError> {
    if board.king_square(color).is_none() {
        return Err(RulesError::MissingKing { color });
    }
    Ok(threatened::<Full>(color, board))
}

/// Return `true` if `color` is in check and no move by any of its pieces
/// gets it out.
///
/// Tries every piece of `color` against every square, in board order.
pub fn is_checkmate(color: Color, board: &Board) -> Result<bool, RulesError> {
    if !is_in_check(color, board)? {
        return Ok(false);
    }

    for piece in board.pieces_of(color) {
        for target in Square::all(board.size()) {
            if !piece.can_move_to(target, board) {
                continue;
            }
            let after = piece.move_to(target, board.clone());
            if !is_in_check(color, &after)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Return `true` if `color` is not in check but has no legal move.
pub fn is_stalemate(color: Color, board: &Board) -> Result<bool, RulesError> {
    if is_in_check(color, board)? {
        return Ok(false);
    }

    let stuck = board.pieces_of(color).all(|piece| {
        Square::all(board.size()).all(|target| !piece.can_move_to(target, board))
    });
    Ok(stuck)
}

/// Classify the position for `color`.
pub fn status(color: Color, board: &Board) -> Result<GameStatus, RulesError> {
    if is_checkmate(color, board)? {
        Ok(GameStatus::Checkmate)
    } else if is_stalemate(color, board)? {
        Ok(GameStatus::Stalemate)
    } else if is_in_check(color, board)? {
        Ok(GameStatus::Check)
    } else {
        Ok(GameStatus::Ongoing)
    }
}
