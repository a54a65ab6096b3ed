//! Move selection errors.

use mitre_core::{Color, RulesError};

/// Errors that can occur while choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The side to move has no legal move at all.
    #[error("no legal move for {color}")]
    NoLegalMove {
        /// The side that was asked to move.
        color: Color,
    },

    /// A rule query failed on the position.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
