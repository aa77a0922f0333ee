use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::operation::{Evaluation, Operation};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tabular,
    Csv,
    Json,
}

#[derive(Serialize)]
struct Metadata {
    total: usize,
}

#[derive(Serialize)]
struct EvaluationsJson<'a> {
    metadata: Metadata,
    evaluations: &'a [Evaluation],
}

#[derive(Serialize)]
struct OperationJson {
    name: &'static str,
    cyclomatic_complexity: usize,
    branches: Vec<&'static str>,
}

#[derive(Serialize)]
struct OperationsJson {
    metadata: Metadata,
    operations: Vec<OperationJson>,
}

pub fn write_evaluations<W: Write>(
    out: &mut W,
    evaluations: &[Evaluation],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Tabular => {
            writeln!(out, "Evaluations ({}):", evaluations.len())?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(out, "{:<10} {:<12} {:<12} {}", "OPERATION", "INPUT", "OUTPUT", "BRANCH")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            for eval in evaluations {
                writeln!(
                    out,
                    "{:<10} {:<12} {:<12} {}",
                    eval.operation.name(),
                    eval.input,
                    eval.output,
                    eval.branch
                )?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "Operation,Input,Output,Branch")?;
            for eval in evaluations {
                writeln!(
                    out,
                    "{},{},{},{}",
                    eval.operation.name(),
                    eval.input,
                    eval.output,
                    eval.branch
                )?;
            }
        }
        OutputFormat::Json => {
            let report = EvaluationsJson {
                metadata: Metadata {
                    total: evaluations.len(),
                },
                evaluations,
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize evaluations as JSON")?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

pub fn write_operations<W: Write>(
    out: &mut W,
    operations: &[Operation],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Tabular => {
            writeln!(out, "Operations ({}):", operations.len())?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            writeln!(out, "{:<10} {:<12} {}", "OPERATION", "COMPLEXITY", "BRANCHES")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            for op in operations {
                writeln!(
                    out,
                    "{:<10} {:<12} {}",
                    op.name(),
                    op.cyclomatic_complexity(),
                    op.branches().join(", ")
                )?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "Operation,Complexity,Branches")?;
            for op in operations {
                writeln!(
                    out,
                    "{},{},{}",
                    op.name(),
                    op.cyclomatic_complexity(),
                    op.branches().join(";")
                )?;
            }
        }
        OutputFormat::Json => {
            let report = OperationsJson {
                metadata: Metadata {
                    total: operations.len(),
                },
                operations: operations
                    .iter()
                    .map(|op| OperationJson {
                        name: op.name(),
                        cyclomatic_complexity: op.cyclomatic_complexity(),
                        branches: op.branches(),
                    })
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize operations as JSON")?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}
