use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slot-gateway")]
#[command(about = "Slot prize game: HTTP gateway, one-off draws, and odds report.")]
pub(crate) struct Cli {
    /// Override config directory (holds `slot-gateway/slot.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run HTTP server. Default bind: 0.0.0.0:8080 (or `gateway.bind` from settings)
    Serve {
        /// Listen address (e.g. 0.0.0.0:8080)
        #[arg(long)]
        bind: Option<String>,

        /// Seed draws for reproducible runs (overrides `draw.seed`)
        #[arg(long)]
        seed: Option<u64>,

        /// Log every draw at debug level
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Draw prizes from the configured set and print each result plus a tally.
    Draw {
        /// Number of draws.
        #[arg(long, default_value_t = 1)]
        count: u32,

        /// Seed draws for reproducible runs (overrides `draw.seed`)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the normalized chance of each configured prize.
    Odds,
}
