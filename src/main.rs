use std::io;
use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bank_operation::{exit_code, run, ProgramConfig, SystemInfo};

fn main() {
    init_logging();

    let code = exit_code(run_program(), &mut io::stderr());
    process::exit(code);
}

fn run_program() -> Result<()> {
    let config = ProgramConfig::default();
    let info = SystemInfo::from_host();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let bank = run(&config, &info, &mut out)?;
    tracing::debug!(customer_id = bank.customer_id(), "bank operation finished");

    Ok(())
}

/// Logs go to stderr so stdout carries only the report. RUST_LOG overrides.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
