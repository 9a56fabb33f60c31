//! Nim at the terminal.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nim_console::{Match, MatchConfig, Terminal};

/// Two-player Nim: take turns removing stones; whoever takes the last one wins.
#[derive(Parser, Debug)]
#[command(name = "nim")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for dealing the piles (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players
    #[arg(long, default_value_t = 2)]
    players: usize,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        let config = MatchConfig::new().player_count(self.players);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Terminal::stdio();

    let result = Match::new(cli.config()).and_then(|mut game| game.play(&mut console));
    match result {
        Ok(outcome) => {
            tracing::info!(seed = ?outcome.seed, turns = outcome.turns, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "match aborted");
            eprintln!("nim: {err}");
            ExitCode::FAILURE
        }
    }
}
