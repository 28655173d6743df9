//! `itemfields`: inspect and edit custom item field definitions.
//!
//! Usage:
//!   itemfields --prefs prefs.json list
//!   itemfields add "Loaned to" --position afterCreators
//!   itemfields encode Shelf:start "Loaned to:afterCreators"

use anyhow::Result;
use clap::Parser;
use itemfields_cli::{run, Args};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
