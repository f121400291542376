//! `calculator` - evaluate a single arithmetic operation from the command line.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calculator::{Calculator, Number, Operation};
use clap::Parser;
use serde::Serialize;

use crate::config::AppConfig;

/// Evaluate one calculator operation and print the result
#[derive(Parser)]
#[command(name = "calculator")]
#[command(version, about)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Print the evaluation as a JSON object
    #[arg(long)]
    json: bool,

    /// One of: add, subtract, multiply, divide, power
    #[arg(required_unless_present = "print_config")]
    operation: Option<Operation>,

    /// Left operand
    #[arg(required_unless_present = "print_config")]
    a: Option<Number>,

    /// Right operand (the exponent for `power`)
    #[arg(required_unless_present = "print_config")]
    b: Option<Number>,
}

#[derive(Serialize)]
struct Evaluation {
    operation: Operation,
    a: Number,
    b: Number,
    result: Number,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // defaults -> YAML (if provided) -> env (CALCULATOR__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    let (Some(operation), Some(a), Some(b)) = (cli.operation, cli.a, cli.b) else {
        anyhow::bail!("an operation and two operands are required");
    };

    let result = operation
        .apply(&Calculator::new(), a, b)
        .with_context(|| format!("failed to evaluate {operation} {a} {b}"))?;
    tracing::info!(%operation, %a, %b, %result, "evaluated");

    if cli.json {
        let evaluation = Evaluation {
            operation,
            a,
            b,
            result,
        };
        println!("{}", serde_json::to_string(&evaluation)?);
    } else {
        println!("{result}");
    }
    Ok(())
}
