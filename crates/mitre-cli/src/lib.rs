//! Console game driver for mitre.

pub mod command;
pub mod config;
pub mod error;
pub mod game;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::CliError;
pub use game::{Game, Outcome};
