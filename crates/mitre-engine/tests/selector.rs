//! Integration tests for the greedy move selector.
//!
//! Each position gives Black a set of options with one clearly strongest
//! class, plus the tie-break and no-move edge cases.

use mitre_core::{Board, Color, Move, Piece, Square, is_checkmate, is_in_check, legal_moves};
use mitre_engine::{MoveClass, SelectError, choose_move};

fn sq(file: u32, rank: u32) -> Square {
    Square::new(file, rank)
}

fn wk(file: u32, rank: u32) -> Piece {
    Piece::king(Color::White, sq(file, rank))
}

fn bk(file: u32, rank: u32) -> Piece {
    Piece::king(Color::Black, sq(file, rank))
}

fn wb(file: u32, rank: u32) -> Piece {
    Piece::bishop(Color::White, sq(file, rank))
}

fn bb(file: u32, rank: u32) -> Piece {
    Piece::bishop(Color::Black, sq(file, rank))
}

/// Play `mv` on `board` and return the result.
fn play(board: &Board, mv: Move) -> Board {
    let piece = *board.piece_at(mv.source()).unwrap();
    piece.move_to(mv.dest(), board.clone())
}

// ── Priority ──────────────────────────────────────────────────────────────────

#[test]
fn finds_mate_in_one() {
    // Bc4-d3 completes the net around the white king on b1
    let board = Board::new(4, vec![wk(2, 1), bk(2, 3), bb(3, 4), bb(4, 2), bb(4, 4)]).unwrap();
    let selection = choose_move(Color::Black, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Checkmate);
    assert_eq!(is_checkmate(Color::White, &play(&board, selection.best_move)), Ok(true));
}

#[test]
fn prefers_check_over_capture() {
    let board = Board::new(5, vec![wk(1, 5), bk(5, 1), wb(4, 4), bb(5, 3)]).unwrap();
    let capture = Move::new(sq(5, 3), sq(4, 4));
    assert!(legal_moves(Color::Black, &board).contains(&capture));

    let selection = choose_move(Color::Black, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Check);
    assert_ne!(selection.best_move, capture);
    assert_eq!(is_in_check(Color::White, &play(&board, selection.best_move)), Ok(true));
}

#[test]
fn prefers_capture_over_quiet_move() {
    let board = Board::new(5, vec![wk(1, 1), bk(5, 5), bb(4, 1), wb(5, 2)]).unwrap();
    let selection = choose_move(Color::Black, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Capture);
    assert_eq!(selection.best_move, Move::new(sq(4, 1), sq(5, 2)));
}

#[test]
fn quiet_move_is_first_in_board_order() {
    // b2 touches the white king, so b3 is the first legal square
    let board = Board::new(4, vec![wk(1, 1), bk(3, 3)]).unwrap();
    let selection = choose_move(Color::Black, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Valid);
    assert_eq!(selection.best_move, Move::new(sq(3, 3), sq(2, 3)));
    assert_eq!(selection.examined, legal_moves(Color::Black, &board).len());
}

#[test]
fn equal_captures_keep_the_first() {
    let board = Board::new(5, vec![bk(1, 1), wk(5, 4), bb(3, 3), wb(2, 4), wb(4, 2)]).unwrap();
    let selection = choose_move(Color::Black, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Capture);
    assert_eq!(selection.best_move, Move::new(sq(3, 3), sq(2, 4)));
}

// ── Edge cases ────────────────────────────────────────────────────────────────

#[test]
fn stalemated_side_has_no_move() {
    let board = Board::new(4, vec![wk(1, 1), wb(1, 2), wb(2, 1), wb(4, 2), bk(4, 4)]).unwrap();
    assert_eq!(
        choose_move(Color::Black, &board),
        Err(SelectError::NoLegalMove {
            color: Color::Black
        })
    );
}

#[test]
fn selection_leaves_board_untouched() {
    let board = Board::new(5, vec![wk(1, 5), bk(5, 1), wb(4, 4), bb(5, 3)]).unwrap();
    let before = board.clone();
    let _ = choose_move(Color::Black, &board).unwrap();
    assert_eq!(board, before);
}

#[test]
fn selects_for_white_too() {
    // Mirror of the capture position with colors swapped
    let board = Board::new(5, vec![bk(1, 1), wk(5, 5), wb(4, 1), bb(5, 2)]).unwrap();
    let selection = choose_move(Color::White, &board).unwrap();
    assert_eq!(selection.class, MoveClass::Capture);
    assert_eq!(selection.best_move, Move::new(sq(4, 1), sq(5, 2)));
}
