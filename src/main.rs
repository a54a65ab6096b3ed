use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;

use mitre_cli::{Game, GameConfig};
use mitre_core::Color;

/// King-and-bishop chess against a greedy opponent.
#[derive(Parser)]
#[command(name = "mitre")]
#[command(about = "Play king-and-bishop chess against a greedy opponent")]
struct Args {
    /// Initial board file; asked for at the prompt when omitted
    board: Option<PathBuf>,

    /// Input that saves the game and quits
    #[arg(long, default_value = "QUIT")]
    quit_word: String,

    /// Play Black instead of White
    #[arg(long)]
    black: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig {
        human: if args.black { Color::Black } else { Color::White },
        quit_word: args.quit_word,
        board_path: args.board,
    };

    info!("mitre starting");
    let outcome = Game::new(io::stdin().lock(), io::stdout().lock(), config)
        .run()
        .context("game aborted")?;
    info!(?outcome, "mitre shutting down");
    Ok(())
}
