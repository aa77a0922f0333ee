use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use rangeclamp::config::Config;
use rangeclamp::logger;
use rangeclamp::operation::{filter_by_complexity, Operation};
use rangeclamp::report::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "rangeclamp")]
#[command(about = "Evaluate and describe the integer range-clamping functions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Directory containing rangeclamp.yml")]
    directory: Option<String>,

    #[arg(short, long, global = true, value_enum, help = "Output format (overrides config)")]
    format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run an operation over one or more values")]
    Eval {
        #[arg(help = "Operation name: classify or validate")]
        operation: String,

        #[arg(required = true, allow_negative_numbers = true, help = "Integer inputs")]
        values: Vec<i32>,
    },
    #[command(about = "List operations with their cyclomatic complexity")]
    Describe {
        #[arg(short, long, help = "Hide operations below this complexity")]
        min_complexity: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let root_dir = cli.directory.unwrap_or_else(|| ".".to_string());
    let config = Config::load_from_dir(&root_dir)?;
    let format = cli.format.unwrap_or(config.output.format);
    tracing::debug!(?format, "Resolved output format");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval { operation, values } => {
            let operation: Operation = operation.parse()?;
            tracing::info!("Evaluating {} value(s) with {}", values.len(), operation);
            let evaluations = operation.evaluate_all(&values);
            report::write_evaluations(&mut out, &evaluations, format)?;
        }
        Commands::Describe { min_complexity } => {
            let min_complexity = min_complexity.unwrap_or(config.describe.min_complexity);
            let operations = filter_by_complexity(&Operation::ALL, min_complexity);
            if operations.is_empty() {
                tracing::info!("No operations with complexity >= {}", min_complexity);
            }
            report::write_operations(&mut out, &operations, format)?;
        }
    }

    out.flush()?;
    Ok(())
}
