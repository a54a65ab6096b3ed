//! The interactive game loop.
//!
//! One side types moves at the console, the other is played by
//! [`choose_move`]. White always moves first. After every move the side
//! about to move is checked for checkmate and stalemate.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use mitre_core::{Board, Color, GameStatus, RulesError, read_board, status, write_board};
use mitre_engine::choose_move;

use crate::command::{Command, parse_command};
use crate::config::GameConfig;
use crate::error::CliError;

const INITIAL_PROMPT: &str = "File name for initial configuration: ";
const FINAL_PROMPT: &str = "File name for final configuration: ";
const INVALID_FILE: &str = "This is not a valid file. ";

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `winner` checkmated the other side.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move had no legal move and was not in check.
    Stalemate,
    /// The human quit and the board was written to `path`.
    Saved {
        /// Where the final board went.
        path: PathBuf,
    },
    /// The human quit before a board was loaded, or input ran out.
    Abandoned,
}

/// A game between the console and the move selector.
pub struct Game<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Create a game reading turns from `input` and printing to `output`.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Load the initial board and play until the game ends.
    pub fn run(mut self) -> Result<Outcome, CliError> {
        let Some(mut board) = self.load_board()? else {
            return Ok(Outcome::Abandoned);
        };
        writeln!(self.output, "The initial configuration is:")?;
        write!(self.output, "{}", board.unicode())?;

        let mut to_move = Color::White;
        loop {
            let outcome = if to_move == self.config.human {
                self.human_turn(&mut board)?
            } else {
                self.computer_turn(&mut board)?
            };
            if let Some(outcome) = outcome {
                info!(?outcome, "game over");
                return Ok(outcome);
            }
            to_move = !to_move;
        }
    }

    /// Load the configured board, or ask for one until a valid file is named.
    fn load_board(&mut self) -> Result<Option<Board>, CliError> {
        if let Some(path) = &self.config.board_path {
            let board = read_board(path)?;
            info!(path = %path.display(), "initial board loaded");
            return Ok(Some(board));
        }

        let mut prompt = INITIAL_PROMPT.to_string();
        loop {
            let Some(name) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            if name == self.config.quit_word {
                return Ok(None);
            }
            match read_board(&name) {
                Ok(board) => {
                    info!(path = %name, "initial board loaded");
                    return Ok(Some(board));
                }
                Err(e) => {
                    warn!(path = %name, error = %e, "cannot load board");
                    prompt = format!("{INVALID_FILE}{INITIAL_PROMPT}");
                }
            }
        }
    }

    /// Read and play one human move, re-prompting until it is legal.
    fn human_turn(&mut self, board: &mut Board) -> Result<Option<Outcome>, CliError> {
        let side = self.config.human;
        loop {
            let Some(line) = self.prompt(&format!("Next move of {side}: "))? else {
                return Ok(Some(Outcome::Abandoned));
            };

            let mv = match parse_command(&line, &self.config.quit_word) {
                Ok(Command::Quit) => return self.save(board),
                Ok(Command::Move(mv)) => mv,
                Err(e) => {
                    warn!(input = %line, error = %e, "unreadable move");
                    writeln!(self.output, "Invalid input. Try again.")?;
                    continue;
                }
            };

            let Some(piece) = board.piece_at(mv.source()).copied() else {
                debug!(%mv, "no piece on source square");
                writeln!(self.output, "Invalid input. Try again.")?;
                continue;
            };
            if piece.color() != side || !piece.can_move_to(mv.dest(), board) {
                debug!(%mv, "illegal move rejected");
                writeln!(self.output, "This is not a valid move. Try again.")?;
                continue;
            }

            *board = piece.move_to(mv.dest(), board.clone());
            writeln!(self.output, "The configuration after {side}'s move is:")?;
            write!(self.output, "{}", board.unicode())?;
            return self.after_move(side, board);
        }
    }

    /// Let the selector play one move for the automated side.
    fn computer_turn(&mut self, board: &mut Board) -> Result<Option<Outcome>, CliError> {
        let side = !self.config.human;
        let selection = choose_move(side, board)?;
        let mv = selection.best_move;
        writeln!(self.output, "Next move of {side} is {mv}")?;

        if let Some(piece) = board.piece_at(mv.source()).copied() {
            *board = piece.move_to(mv.dest(), board.clone());
        }
        writeln!(self.output, "The configuration after {side}'s move is:")?;
        write!(self.output, "{}", board.unicode())?;
        self.after_move(side, board)
    }

    /// Report checkmate or stalemate of the side that moves next.
    fn after_move(&mut self, mover: Color, board: &Board) -> Result<Option<Outcome>, CliError> {
        let human = mover == self.config.human;
        // A captured king ends the game like a mate
        let next = match status(!mover, board) {
            Err(RulesError::MissingKing { .. }) => GameStatus::Checkmate,
            result => result?,
        };

        let outcome = match next {
            GameStatus::Checkmate => {
                if human {
                    writeln!(self.output, "Checkmate! {mover} wins.")?;
                } else {
                    writeln!(self.output, "Game over. {mover} wins.")?;
                }
                Outcome::Checkmate { winner: mover }
            }
            GameStatus::Stalemate => {
                if human {
                    writeln!(self.output, "Stalemate! The game is a draw.")?;
                } else {
                    writeln!(self.output, "Game over. Stalemate.")?;
                }
                Outcome::Stalemate
            }
            GameStatus::Check | GameStatus::Ongoing => return Ok(None),
        };
        Ok(Some(outcome))
    }

    /// Ask for a file name and write the board there.
    fn save(&mut self, board: &Board) -> Result<Option<Outcome>, CliError> {
        let mut prompt = FINAL_PROMPT.to_string();
        loop {
            let Some(name) = self.prompt(&prompt)? else {
                return Ok(Some(Outcome::Abandoned));
            };
            match write_board(&name, board) {
                Ok(()) => {
                    writeln!(self.output, "The game configuration saved.")?;
                    info!(path = %name, "board saved");
                    return Ok(Some(Outcome::Saved {
                        path: PathBuf::from(name),
                    }));
                }
                Err(e) => {
                    warn!(path = %name, error = %e, "cannot save board");
                    prompt = format!("{INVALID_FILE}{FINAL_PROMPT}");
                }
            }
        }
    }

    /// Print `text` without a newline and read one trimmed line.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
