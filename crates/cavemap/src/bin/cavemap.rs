//! cavemap binary
//!
//! Run with: cavemap width height fillPercent (r1_threshold r2_threshold repeatCount)+

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use cavemap::cavemap_automata::generate_cave;
use cavemap::{render_output, Cli, CliError, USAGE};
use clap::error::ErrorKind;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, error};

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::parse_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliError::Parse(e))
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            e.exit()
        }
        Err(e) => return usage_failure(&e),
    };

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => return usage_failure(&e),
    };

    let seed = clock_seed();
    debug!(seed, "seeding generator from the wall clock");
    let mut rng = SmallRng::seed_from_u64(seed);

    let cave = generate_cave(&config, &mut rng);

    match render_output(cli.format, &config, &cave) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to render output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the map
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print the usage line to stdout and the reason to stderr, exiting with status 1
fn usage_failure(err: &CliError) -> ExitCode {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cavemap".to_string());
    println!("Usage: {program} {USAGE}");
    eprintln!("{err}");
    ExitCode::from(1)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
