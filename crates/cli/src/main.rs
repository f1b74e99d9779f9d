//! `ward`: run a single-ward hospital session.
//!
//! The ward layout comes from flags, the environment or a `.env` file; when it is incomplete the
//! operator is prompted for it. Operator input is read from stdin, or replayed from `--script`.
//!
//! # Environment Variables
//! - `WARD_NAME`: name of the ward
//! - `WARD_FIRST_BED`: label of the first bed
//! - `WARD_LAST_BED`: label of the last bed
//! - `RUST_LOG`: log filter (default: `ward_core=info,ward_console=info`)

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ward_console::Console;
use ward_core::constants::{WARD_FIRST_BED_ENV, WARD_LAST_BED_ENV, WARD_NAME_ENV};
use ward_core::WardConfig;

#[derive(Parser)]
#[command(name = "ward")]
#[command(about = "Single-ward hospital console")]
struct Cli {
    /// Name of the ward
    #[arg(long, env = WARD_NAME_ENV)]
    ward_name: Option<String>,
    /// Label of the first bed
    #[arg(long, env = WARD_FIRST_BED_ENV)]
    first_bed: Option<String>,
    /// Label of the last bed
    #[arg(long, env = WARD_LAST_BED_ENV)]
    last_bed: Option<String>,
    /// Replay operator input from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Also print the final state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ward_core=info".parse()?)
                .add_directive("ward_console=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = WardConfig::from_env_values(cli.ward_name, cli.first_bed, cli.last_bed)
        .context("invalid ward configuration")?;

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            tracing::info!("replaying operator input from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut console = Console::new(input, stdout.lock());
    let system = console.run(cfg)?;

    if cli.json {
        let json = system.to_json().context("failed to serialise final state")?;
        let (_, mut output) = console.into_inner();
        writeln!(output, "{json}")?;
    }

    Ok(())
}
