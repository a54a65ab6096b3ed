//! Raw reach: where a piece could go, ignoring what the move does to its king.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Piece {
    /// Return `true` if this piece, from its current square, can geometrically
    /// reach `target` on `board`.
    ///
    /// The target must be on the board and must not hold a piece of the same
    /// side. Bishops need a strict diagonal with every square in between
    /// empty; kings need a single step in any direction. Whether the move
    /// would leave the mover's own king in check is not considered here, see
    /// [`Piece::can_move_to`].
    pub fn reaches(&self, target: Square, board: &Board) -> bool {
        if !board.contains(target) {
            return false;
        }
        let geometry = match self.kind() {
            PieceKind::King => king_reaches(self.square(), target),
            PieceKind::Bishop => bishop_reaches(self.square(), target, board),
        };
        geometry
            && board
                .piece_at(target)
                .is_none_or(|p| p.color() != self.color())
    }
}

fn king_reaches(from: Square, to: Square) -> bool {
    from.king_distance(to) == 1
}

fn bishop_reaches(from: Square, to: Square, board: &Board) -> bool {
    let (df, dr) = from.delta(to);
    // df == 0 would be a null move, which is trivially "diagonal"
    if df == 0 || df.abs() != dr.abs() {
        return false;
    }

    let (step_f, step_r) = (df.signum(), dr.signum());
    (1..df.abs()).all(|i| {
        from.offset(step_f * i, step_r * i)
            .is_none_or(|sq| !board.is_occupied(sq))
    })
}
