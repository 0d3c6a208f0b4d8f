//! slot-gateway CLI: serve, draw, or odds.
//!
//! Settings from `packages/conf/slot.yaml` (system) and
//! `<PRJ_CONFIG_HOME>/slot-gateway/slot.yaml` (user). Override the config home with `--conf <dir>`.
//!
//! Logging: set `RUST_LOG=slot_gateway=debug,slot_prizes=debug` to see every draw on stderr.

mod cli;
mod nodes;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slot_gateway::{load_slot_settings, set_config_home_override};

use crate::cli::{Cli, Command};
use crate::nodes::{run_draw_mode, run_odds_mode, run_serve_mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }

    // Initialize tracing: RUST_LOG overrides; --verbose on serve => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let verbose = matches!(&cli.command, Command::Serve { verbose: true, .. });
        EnvFilter::new(if verbose {
            "slot_gateway=debug,slot_prizes=debug"
        } else {
            "slot_gateway=info,slot_prizes=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = load_slot_settings();

    match cli.command {
        Command::Serve {
            bind,
            seed,
            verbose: _,
        } => run_serve_mode(bind, seed, &settings).await,
        Command::Draw { count, seed } => run_draw_mode(count, seed, &settings),
        Command::Odds => run_odds_mode(&settings),
    }
}
