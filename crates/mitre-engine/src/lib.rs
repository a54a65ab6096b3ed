//! Automated move selection for mitre.

pub mod error;
pub mod select;

pub use error::SelectError;
pub use select::{MoveClass, Selection, choose_move, classify};
