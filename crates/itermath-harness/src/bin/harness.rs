//! CLI entrypoint for the itermath harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use itermath_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use itermath_harness::{HarnessError, report, verify};

/// Demo and conformance tooling for the iterative approximation engine.
#[derive(Debug, Parser)]
#[command(name = "itermath-harness")]
#[command(about = "Iterative logarithm and exponentiation demo harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Approximate ln(X) with N iterations, next to the host library value.
    #[command(allow_negative_numbers = true)]
    Log {
        /// Argument of the logarithm.
        x: f64,
        /// Number of iterations to spend.
        n: u32,
    },
    /// Approximate X^Y with N iterations, next to the host library value.
    #[command(allow_negative_numbers = true)]
    Pow {
        /// Base of the power.
        x: f64,
        /// Exponent.
        y: f64,
        /// Number of iterations to spend.
        n: u32,
    },
    /// Run the built-in conformance suite.
    Verify {
        /// Write a JSON summary to this path.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Append JSONL log entries to this path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, HarnessError> {
    match cli.command {
        Command::Log { x, n } => {
            ensure_iterations(n)?;
            print!("{}", report::render(&report::log_block(x, n)));
            Ok(ExitCode::SUCCESS)
        }
        Command::Pow { x, y, n } => {
            ensure_iterations(n)?;
            print!("{}", report::render(&report::pow_block(x, y, n)));
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { report, log } => run_verify(report, log),
    }
}

fn ensure_iterations(n: u32) -> Result<(), HarnessError> {
    if n == 0 {
        Err(HarnessError::ZeroIterations)
    } else {
        Ok(())
    }
}

fn run_verify(report: Option<PathBuf>, log: Option<PathBuf>) -> Result<ExitCode, HarnessError> {
    let summary = verify::run_builtin();
    for result in &summary.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        println!(
            "{status} {} expected {} actual {}",
            result.case_name, result.expected, result.actual
        );
    }
    println!(
        "{} cases, {} passed, {} failed",
        summary.total, summary.passed, summary.failed
    );

    if let Some(path) = report {
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
    }
    if let Some(path) = log {
        let trace_id = format!("verify-{}", std::process::id());
        let mut emitter = LogEmitter::to_file(&path)?;
        for result in &summary.results {
            let outcome = if result.passed { Outcome::Pass } else { Outcome::Fail };
            let entry = LogEntry::new(trace_id.as_str(), LogLevel::Info, "verify_case")
                .with_outcome(outcome)
                .with_details(serde_json::json!({
                    "case": result.case_name,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            emitter.emit(&entry)?;
        }
    }

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
