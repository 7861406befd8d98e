//! tschess - play restricted-rules chess in the terminal.
//!
//! Type moves such as `e2 e4`; `exit`, `quit` or `q` ends the session.

mod config;
mod repl;

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use config::ReplConfig;
use repl::Repl;
use tracing::Level;

#[derive(Parser)]
#[command(name = "tschess")]
#[command(about = "Restricted-rules chess in the terminal")]
struct Cli {
    /// Path to a TOML config file (defaults to ./tschess.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Do not print capture lists after each move
    #[arg(long)]
    no_captures: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) if !path.exists() => bail!("config file {} does not exist", path.display()),
        Some(path) => path.clone(),
        None => ReplConfig::config_path(),
    };
    let mut config = ReplConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if cli.no_captures {
        config.show_captures = false;
    }

    let level = match cli.verbose {
        0 => Level::from_str(&config.log_level)
            .with_context(|| format!("invalid log_level '{}'", config.log_level))?,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(config, stdin.lock(), stdout.lock());
    repl.run()?;

    let captures = repl.game().captures();
    tracing::info!(
        white = captures.white().len(),
        black = captures.black().len(),
        "session closed"
    );
    Ok(())
}
