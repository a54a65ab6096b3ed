//! Core types for king-and-bishop chess: squares, pieces, boards, board
//! files, and the game rules.

mod board;
mod board_file;
mod chess_move;
mod color;
mod error;
mod piece;
mod piece_kind;
mod square;

pub mod rules;

pub use board::{Board, UnicodeBoard};
pub use board_file::{read_board, write_board};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, BoardFileError, RulesError, SquareError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rules::{GameStatus, is_checkmate, is_in_check, is_stalemate, legal_moves, status};
pub use square::Square;
