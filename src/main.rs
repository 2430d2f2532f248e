//! CodeWords console game.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codewords::{ColorMode, PhraseList, PuzzleConfig, PuzzleEngine, PuzzleRng, Session};

#[derive(Parser)]
#[command(name = "codewords", about = "Decode a substitution-ciphered phrase")]
struct Cli {
    /// Phrase file, one phrase per line
    #[arg(long, default_value = "codewords.txt")]
    phrases: PathBuf,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut phrases = PhraseList::from_path(&cli.phrases)
        .with_context(|| format!("failed to load phrases from {}", cli.phrases.display()))?;
    let mut rng = cli.seed.map_or_else(PuzzleRng::from_entropy, PuzzleRng::new);
    info!(seed = rng.seed(), phrases = phrases.len(), "starting session");

    let color = if cli.no_color {
        ColorMode::Plain
    } else {
        ColorMode::Color
    };
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), color);
    session
        .run(|| PuzzleEngine::new(&mut phrases, &mut rng, PuzzleConfig::default()))
        .context("game session failed")?;

    Ok(())
}
