//! DiceKeys command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Canonical seed from a human-readable DiceKey
//! dicekeys seed A1tB2r...
//!
//! # Canonical seed from optical face reads, without orientations
//! dicekeys seed --face-reads reads.json --exclude-orientations
//!
//! # Check whether a web caller may run an API request
//! dicekeys authorize 'https://dicekeys.app/?command=getSecret&...' --origin https://example.com/
//! ```

mod commands;
mod error;

use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// DiceKeys seed and request authorization tool
#[derive(Parser, Debug)]
#[command(name = "dicekeys")]
#[command(about = "DiceKeys seed canonicalization and API request authorization")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rotation-invariant seed of a DiceKey
    Seed(commands::SeedArgs),
    /// Decode an API request URL and run its authorization gates
    Authorize(commands::AuthorizeArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let mut out = io::stdout().lock();
    match &args.command {
        Command::Seed(seed) => commands::seed(seed, &mut out)?,
        Command::Authorize(authorize) => commands::authorize(authorize, &mut out)?,
    }

    Ok(())
}
