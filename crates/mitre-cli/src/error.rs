//! Game driver errors.

use mitre_core::{BoardFileError, RulesError};
use mitre_engine::SelectError;

/// Errors that end a game abnormally.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the console or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The board file given up front could not be loaded.
    #[error("cannot load board: {0}")]
    Board(#[from] BoardFileError),

    /// The automated side could not pick a move.
    #[error("move selection failed: {0}")]
    Select(#[from] SelectError),

    /// A rule query failed on the current position.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
