//! Game rules: reach, legality, and check detection.

mod legality;
mod reach;
mod scope;
mod status;

pub use status::{GameStatus, is_checkmate, is_in_check, is_stalemate, status};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Every legal move for `color`, in canonical order.
///
/// Pieces are taken in board order and, for each piece, targets in
/// file-major order (`a1`, `a2`, ..., `b1`, ...).
pub fn legal_moves(color: Color, board: &Board) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| {
            Square::all(board.size())
                .filter(move |&target| piece.can_move_to(target, board))
                .map(move |target| Move::new(piece.square(), target))
        })
        .collect()
}
