//! ir-localflavor - command line entry point
//!
//! Usage: `ir-localflavor <postal-code|national-code> [VALUE...]`
//!
//! Each value (or each stdin line when no values are given) is validated and
//! reported as one JSON object per line on stdout. Logs go to stderr.

use anyhow::{bail, Context, Result};
use ir_localflavor::{Checker, CodeKind, Config, NationalCodeField, PostalCodeField};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        reject_zero_groups = config.reject_zero_groups,
        "Configuration loaded"
    );

    let mut args = std::env::args().skip(1);
    let kind: CodeKind = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(kind) => kind,
            Err(e) => {
                error!("{}", e);
                bail!("usage: ir-localflavor <postal-code|national-code> [VALUE...]");
            }
        },
        None => bail!("usage: ir-localflavor <postal-code|national-code> [VALUE...]"),
    };
    let values: Vec<String> = args.collect();

    let checker = Checker::new(
        PostalCodeField::postal_code(),
        NationalCodeField::national_code_with(config.national_code_validator()),
    );

    let stdout = io::stdout();
    let out = stdout.lock();

    let all_valid = if values.is_empty() {
        debug!(%kind, "Reading values from stdin");
        checker.run_lines(kind, io::stdin().lock(), out)
    } else {
        checker.run(kind, values.into_iter().map(Ok), out)
    }
    .context("Failed to process values")?;

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
