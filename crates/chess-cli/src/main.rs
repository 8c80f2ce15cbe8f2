//! Chess - play a two-player game in the terminal.
//!
//! Both sides enter moves at the same keyboard as two squares, the piece to
//! move and its destination, each written as `file rank` (e.g. `4 1`).

mod config;
mod input;
mod render;
mod session;

use clap::Parser;
use config::CliConfig;
use session::{Session, SessionEnd, SessionOptions};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Chess - play a two-player game in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess against a friend in the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,

    /// Render pieces without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Do not list legal moves after selecting a piece
    #[arg(long)]
    no_hints: bool,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = CliConfig::load(&args.config)?;

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let level = Level::from_str(level)
        .map_err(|_| anyhow::anyhow!("Unknown log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("Config: {:?}", args.config);

    let options = SessionOptions {
        color: config.color && !args.no_color,
        show_hints: config.show_hints && !args.no_hints,
    };
    let stdin = io::stdin();
    let mut session = Session::new(
        chess_engine::Game::new(),
        options,
        stdin.lock(),
        io::stdout(),
    );

    match session.run()? {
        SessionEnd::Checkmate(winner) => tracing::info!("{} won by checkmate", winner),
        SessionEnd::Quit => {
            tracing::info!(pieces = session.game().pieces().len(), "Game abandoned")
        }
    }
    Ok(())
}
