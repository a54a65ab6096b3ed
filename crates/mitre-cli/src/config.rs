//! Driver configuration.

use std::path::PathBuf;

use mitre_core::Color;

/// Settings for one game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The side typed in at the console. The other side is automated.
    pub human: Color,
    /// Input that ends the game at any prompt.
    pub quit_word: String,
    /// Initial board file. When absent the driver asks for one.
    pub board_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            quit_word: "QUIT".to_string(),
            board_path: None,
        }
    }
}
