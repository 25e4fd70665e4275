use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use configuration::{Config, ConfigArgs, Logging};
use core_types::{CompoundingFrequency, CompoundingRequest, PurchaseRequest};
use engine::{Calculator, EngineError, ValidationError};
use serde_json::json;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod display;
mod input;

use display::Formatter;
use input::{NumberKind, parse_field, parse_purchase};

/// Exit status when the submitted numbers were rejected.
const EXIT_INVALID_INPUT: u8 = 2;
/// Exit status for every other failure.
const EXIT_FAILURE: u8 = 1;

/// The main entry point for the accrue calculator.
fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match cli.config.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    // Execute the appropriate command
    match run(cli.command, cli.json, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, cli.json),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Compound growth and average purchase price calculator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate compound growth, optionally with a fixed contribution every period.
    Compound(CompoundArgs),
    /// Compute the volume-weighted average price of several purchases.
    Average(AverageArgs),
}

#[derive(Args)]
struct CompoundArgs {
    /// Initial principal (e.g. "1,000,000").
    #[arg(long, default_value = "")]
    principal: String,

    /// Annual interest rate in percent (e.g. "5.5").
    #[arg(long, default_value = "")]
    rate: String,

    /// Duration in years; fractional periods are dropped.
    #[arg(long, default_value = "")]
    years: String,

    /// Compounding frequency: annual, semiannual, quarterly, monthly or daily.
    #[arg(long)]
    frequency: Option<CompoundingFrequency>,

    /// Amount added at the end of every period.
    #[arg(long, default_value = "")]
    contribution: String,

    /// Print only the headline figures, not the period ledger.
    #[arg(long)]
    summary_only: bool,
}

#[derive(Args)]
struct AverageArgs {
    /// A purchase as AMOUNT@PRICE (e.g. "1,000,000@50,000"). Repeat for each buy.
    #[arg(long = "entry", value_name = "AMOUNT@PRICE", value_parser = parse_purchase, required = true)]
    entries: Vec<PurchaseRequest>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn init_tracing(logging: &Logging) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn run(command: Commands, as_json: bool, config: &Config) -> Result<()> {
    let calculator = Calculator::new(&config.limits);
    let formatter = Formatter::new(&config.display);

    match command {
        Commands::Compound(args) => handle_compound(args, as_json, config, &calculator, &formatter),
        Commands::Average(args) => handle_average(args, as_json, &calculator, &formatter),
    }
}

fn handle_compound(
    args: CompoundArgs,
    as_json: bool,
    config: &Config,
    calculator: &Calculator,
    formatter: &Formatter,
) -> Result<()> {
    let request = CompoundingRequest {
        principal: parse_field(&args.principal, NumberKind::Whole),
        annual_rate_percent: parse_field(&args.rate, NumberKind::Fractional),
        years: parse_field(&args.years, NumberKind::Fractional),
        frequency: args.frequency.unwrap_or(config.defaults.frequency),
        contribution_per_period: parse_field(&args.contribution, NumberKind::Whole),
    };
    tracing::debug!(?request, "Parsed compounding request.");

    let result = calculator.simulate_compounding(&request)?;

    if as_json {
        let output = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", display::summary_table(display::compounding_summary(formatter, &result)));
    if !args.summary_only && !result.ledger.is_empty() {
        println!();
        println!("{}", display::ledger_table(formatter, &result));
    }
    Ok(())
}

fn handle_average(
    args: AverageArgs,
    as_json: bool,
    calculator: &Calculator,
    formatter: &Formatter,
) -> Result<()> {
    let result = calculator.compute_average_cost(&args.entries)?;

    if as_json {
        let output = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", display::summary_table(display::average_cost_summary(formatter, &result)));
    println!();
    println!("{}", display::purchase_table(formatter, &result));
    Ok(())
}

/// Where a failure message is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Stdout,
    Stderr,
}

/// A failure rendered for the user, with the exit status to finish on.
#[derive(Debug)]
struct ErrorReport {
    status: u8,
    channel: Channel,
    message: String,
}

/// Prints the failure and picks the exit status.
fn report_error(err: &anyhow::Error, as_json: bool) -> ExitCode {
    let report = error_report(err, as_json);
    if report.status == EXIT_FAILURE {
        tracing::error!(error = ?err, "Calculation failed.");
    }
    match report.channel {
        Channel::Stdout => println!("{}", report.message),
        Channel::Stderr => eprintln!("{}", report.message),
    }
    ExitCode::from(report.status)
}

/// Rejected input lists every offending field and exits with `EXIT_INVALID_INPUT`.
/// In JSON mode the field list goes to stdout so it can be piped like a result.
fn error_report(err: &anyhow::Error, as_json: bool) -> ErrorReport {
    let validation = err
        .downcast_ref::<EngineError>()
        .and_then(EngineError::as_validation);

    let Some(validation) = validation else {
        return ErrorReport {
            status: EXIT_FAILURE,
            channel: Channel::Stderr,
            message: format!("Error: {:#}", err),
        };
    };

    if as_json {
        return ErrorReport {
            status: EXIT_INVALID_INPUT,
            channel: Channel::Stdout,
            message: validation_json(validation).to_string(),
        };
    }

    let mut message = String::from("Please enter a valid number in every highlighted field:");
    for (field, fault) in &validation.faults {
        message.push_str(&format!("\n  - {}: {}", field, fault));
    }
    ErrorReport {
        status: EXIT_INVALID_INPUT,
        channel: Channel::Stderr,
        message,
    }
}

fn validation_json(validation: &ValidationError) -> serde_json::Value {
    let faults: Vec<_> = validation
        .faults
        .iter()
        .map(|(field, fault)| json!({ "field": field.to_string(), "reason": fault.to_string() }))
        .collect();
    json!({ "error": "invalid input", "fields": faults })
}
