//! Greedy one-ply move selection.
//!
//! Every legal move is simulated and ranked by what it does to the
//! opponent. The highest [`MoveClass`] wins; among equals the first move in
//! canonical order (piece list order, then file, then rank) is kept.

use tracing::{debug, trace};

use mitre_core::{Board, Color, Move, Piece, Square, is_checkmate, is_in_check};

use crate::error::SelectError;

/// Outcome class of a move, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveClass {
    /// A legal move with no other effect.
    Valid,
    /// Takes an opposing piece.
    Capture,
    /// Puts the opponent in check.
    Check,
    /// Checkmates the opponent.
    Checkmate,
}

/// The move picked by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The chosen move.
    pub best_move: Move,
    /// Its outcome class.
    pub class: MoveClass,
    /// Number of legal moves classified.
    pub examined: usize,
}

/// Pick a move for `color` on `board`.
///
/// Stops at the first checkmating move. Returns
/// [`SelectError::NoLegalMove`] if `color` cannot move.
pub fn choose_move(color: Color, board: &Board) -> Result<Selection, SelectError> {
    let mut best: Option<(Move, MoveClass)> = None;
    let mut examined = 0;

    'search: for piece in board.pieces_of(color) {
        for target in Square::all(board.size()) {
            if !piece.can_move_to(target, board) {
                continue;
            }
            examined += 1;

            let mv = Move::new(piece.square(), target);
            let class = classify(piece, target, board)?;
            trace!(%mv, ?class, "candidate");

            if best.is_none_or(|(_, best_class)| class > best_class) {
                best = Some((mv, class));
            }
            if class == MoveClass::Checkmate {
                break 'search;
            }
        }
    }

    let (best_move, class) = best.ok_or(SelectError::NoLegalMove { color })?;
    debug!(%color, %best_move, ?class, examined, "move selected");
    Ok(Selection {
        best_move,
        class,
        examined,
    })
}

/// Classify a legal move of `piece` to `target` by simulating it.
///
/// Taking the opposing king counts as checkmate.
pub fn classify(piece: &Piece, target: Square, board: &Board) -> Result<MoveClass, SelectError> {
    let opponent = !piece.color();
    let captures = board.is_occupied(target);
    let after = piece.move_to(target, board.clone());

    if after.king_square(opponent).is_none() {
        return Ok(MoveClass::Checkmate);
    }
    let class = if is_checkmate(opponent, &after)? {
        MoveClass::Checkmate
    } else if is_in_check(opponent, &after)? {
        MoveClass::Check
    } else if captures {
        MoveClass::Capture
    } else {
        MoveClass::Valid
    };
    Ok(class)
}
