//! Integration tests for the console driver, using in-memory streams and
//! scratch board files.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use mitre_cli::{CliError, Game, GameConfig, Outcome};
use mitre_core::{Board, Color, Square, read_board};
use tempfile::TempDir;

const EXAMPLE: &str = "5\nBb5, Bd4, Bc1, Kc5\nBc3, Be3, Kb3\n";

/// Write `contents` to `name` inside `dir` and return the path.
fn board_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(config: GameConfig, input: &str) -> (Result<Outcome, CliError>, String) {
    let mut output = Vec::new();
    let outcome = Game::new(Cursor::new(input.as_bytes()), &mut output, config).run();
    (outcome, String::from_utf8(output).unwrap())
}

fn play(input: &str) -> (Outcome, String) {
    let (outcome, output) = run(GameConfig::default(), input);
    (outcome.unwrap(), output)
}

fn line(path: &Path) -> String {
    format!("{}\n", path.display())
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn quit_at_file_prompt() {
    let (outcome, output) = play("QUIT\n");
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(output, "File name for initial configuration: ");
}

#[test]
fn empty_input_abandons() {
    let (outcome, output) = play("");
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(output, "File name for initial configuration: ");
}

#[test]
fn bad_file_name_reprompts() {
    let dir = tempfile::tempdir().unwrap();
    let good = board_file(&dir, "board.txt", EXAMPLE);
    let bad = board_file(&dir, "bad.txt", "5\nKa1\n");
    let missing = dir.path().join("missing.txt");

    let input = format!("{}{}{}", line(&missing), line(&bad), line(&good));
    let (outcome, output) = play(&input);
    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(
        output
            .matches("This is not a valid file. File name for initial configuration: ")
            .count(),
        2
    );
    assert!(output.contains("The initial configuration is:\n"));
    assert!(output.ends_with("Next move of White: "));
}

#[test]
fn configured_board_skips_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        board_path: Some(board_file(&dir, "board.txt", EXAMPLE)),
        ..GameConfig::default()
    };
    let (outcome, output) = run(config, "");
    assert_eq!(outcome.unwrap(), Outcome::Abandoned);
    assert!(output.starts_with("The initial configuration is:\n"));
}

#[test]
fn configured_board_must_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        board_path: Some(dir.path().join("missing.txt")),
        ..GameConfig::default()
    };
    let (outcome, output) = run(config, "");
    assert!(matches!(outcome, Err(CliError::Board(_))));
    assert!(output.is_empty());
}

// ── Turns ─────────────────────────────────────────────────────────────────────

#[test]
fn rejected_moves_then_save() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "board.txt", EXAMPLE);
    let saved = dir.path().join("saved.txt");

    // garbage, empty square, black piece, pinned bishop, then quit
    let input = format!("{}hello\na1a2\nc3d2\nd4e5\nQUIT\n{}", line(&board), line(&saved));
    let (outcome, output) = play(&input);

    assert_eq!(outcome, Outcome::Saved { path: saved.clone() });
    assert_eq!(output.matches("Invalid input. Try again.\n").count(), 2);
    assert_eq!(output.matches("This is not a valid move. Try again.\n").count(), 2);
    assert!(output.contains("File name for final configuration: The game configuration saved.\n"));
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), EXAMPLE);
}

#[test]
fn both_sides_move_then_save() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "board.txt", EXAMPLE);
    let saved = dir.path().join("saved.txt");

    let input = format!("{}c1d2\nQUIT\n{}", line(&board), line(&saved));
    let (outcome, output) = play(&input);

    assert_eq!(outcome, Outcome::Saved { path: saved.clone() });
    assert!(output.contains("The configuration after White's move is:\n"));
    assert!(output.contains("Next move of Black is "));
    assert!(output.contains("The configuration after Black's move is:\n"));

    let after = read_board(&saved).unwrap();
    let d2 = after.piece_at(Square::new(4, 2)).map(|p| p.color());
    assert_eq!(d2, Some(Color::White));
}

#[test]
fn white_delivers_mate() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "mate.txt", "4\nKb3, Bc4, Bd2, Bd4\nKb1\n");

    let (outcome, output) = play(&format!("{}c4d3\n", line(&board)));
    assert_eq!(
        outcome,
        Outcome::Checkmate {
            winner: Color::White
        }
    );
    assert!(output.ends_with("Checkmate! White wins.\n"));
}

#[test]
fn white_stalemates_black() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "stalemate.txt", "4\nKb2, Bc1\nKa4\n");

    let (outcome, output) = play(&format!("{}c1d2\n", line(&board)));
    assert_eq!(outcome, Outcome::Stalemate);
    assert!(output.ends_with("Stalemate! The game is a draw.\n"));
}

#[test]
fn black_replies_with_mate() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "net.txt", "5\nKa1, Bd5\nKa3, Bc2, Bb4\n");

    let (outcome, output) = play(&format!("{}d5e4\n", line(&board)));
    assert_eq!(
        outcome,
        Outcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(output.contains("Next move of Black is "));
    assert!(output.ends_with("Game over. Black wins.\n"));
}

#[test]
fn human_can_play_black() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        human: Color::Black,
        board_path: Some(board_file(&dir, "board.txt", EXAMPLE)),
        ..GameConfig::default()
    };
    let saved = dir.path().join("saved.txt");

    let (outcome, output) = run(config, &format!("QUIT\n{}", line(&saved)));
    assert_eq!(outcome.unwrap(), Outcome::Saved { path: saved });
    let white_moved = output.find("Next move of White is ").unwrap();
    let black_asked = output.find("Next move of Black: ").unwrap();
    assert!(white_moved < black_asked);
}

#[test]
fn custom_quit_word() {
    let config = GameConfig {
        quit_word: "exit".to_string(),
        ..GameConfig::default()
    };
    let (outcome, _) = run(config, "exit\n");
    assert_eq!(outcome.unwrap(), Outcome::Abandoned);
}

#[test]
fn saved_board_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_file(&dir, "board.txt", EXAMPLE);
    let saved = dir.path().join("saved.txt");

    play(&format!("{}QUIT\n{}", line(&board), line(&saved)));
    let reloaded: Board = std::fs::read_to_string(&saved).unwrap().parse().unwrap();
    assert_eq!(reloaded, EXAMPLE.parse::<Board>().unwrap());
}
