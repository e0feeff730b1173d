//! fisher CLI
//!
//! Prints the sample size (or achieved power) of a two-group design to
//! stdout. Invalid input is reported as a warning with exit code 2, a
//! failed computation as an error with exit code 1.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fisher::compute::{compute, simulate_power};
use fisher::error::{FailureKind, FisherErr};

mod cli;
mod output;

use cli::Cli;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_env("FISHER_LOG").unwrap_or_else(|_| EnvFilter::new("fisher=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let request = cli.command.request()?;

    let outcome = match compute(&request, cli.target.into(), cli.n1) {
        Ok(outcome) => outcome,
        Err(e) => return report_failure(cli, &e),
    };

    let simulation = match cli.simulate {
        Some(n_sims) => {
            let (n1, n2) = outcome.group_sizes();
            match simulate_power(&request, n1, n2, n_sims, cli.seed) {
                Ok(sim) => Some(sim),
                Err(e) => return report_failure(cli, &e),
            }
        }
        None => None,
    };

    if cli.json {
        let report = output::JsonReport {
            request: &request,
            outcome: &outcome,
            simulation: simulation.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::text(&request, &outcome, simulation.as_ref()));
    }
    Ok(ExitCode::SUCCESS)
}

fn report_failure(cli: &Cli, err: &FisherErr) -> Result<ExitCode> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output::JsonFailure::new(err))?);
    } else {
        eprintln!("{}: {err}", output::status(err.kind()));
    }
    Ok(match err.kind() {
        FailureKind::InvalidInput => ExitCode::from(2),
        FailureKind::ComputationFailed => ExitCode::FAILURE,
    })
}
