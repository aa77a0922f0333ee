use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::classify::{classify_number, NumberClass};
use crate::validate::{validate_and_process_value, ValueRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = "classify")]
    ClassifyNumber,
    #[serde(rename = "validate")]
    ValidateAndProcessValue,
}

/// One evaluated call: which operation ran, on what, through which branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub input: i32,
    pub output: i32,
    pub branch: &'static str,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::ClassifyNumber, Operation::ValidateAndProcessValue];

    pub fn name(self) -> &'static str {
        match self {
            Operation::ClassifyNumber => "classify",
            Operation::ValidateAndProcessValue => "validate",
        }
    }

    /// Labels of every branch, in evaluation order.
    pub fn branches(self) -> Vec<&'static str> {
        match self {
            Operation::ClassifyNumber => NumberClass::ALL.iter().map(|c| c.label()).collect(),
            Operation::ValidateAndProcessValue => {
                ValueRange::ALL.iter().map(|r| r.label()).collect()
            }
        }
    }

    /// One base path plus one per decision point, i.e. the branch count.
    pub fn cyclomatic_complexity(self) -> usize {
        match self {
            Operation::ClassifyNumber => NumberClass::ALL.len(),
            Operation::ValidateAndProcessValue => ValueRange::ALL.len(),
        }
    }

    pub fn evaluate(self, input: i32) -> Evaluation {
        let (output, branch) = match self {
            Operation::ClassifyNumber => (classify_number(input), NumberClass::of(input).label()),
            Operation::ValidateAndProcessValue => (
                validate_and_process_value(input),
                ValueRange::of(input).label(),
            ),
        };

        tracing::debug!(operation = self.name(), input, output, branch, "evaluated");

        Evaluation {
            operation: self,
            input,
            output,
            branch,
        }
    }

    pub fn evaluate_all(self, inputs: &[i32]) -> Vec<Evaluation> {
        inputs.iter().map(|&input| self.evaluate(input)).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classify" | "classifynumber" => Ok(Operation::ClassifyNumber),
            "validate" | "validateandprocessvalue" => Ok(Operation::ValidateAndProcessValue),
            other => Err(anyhow!(
                "Unknown operation: {} (expected one of: classify, validate)",
                other
            )),
        }
    }
}

/// Drops operations whose cyclomatic complexity is below `min_complexity`.
pub fn filter_by_complexity(operations: &[Operation], min_complexity: usize) -> Vec<Operation> {
    operations
        .iter()
        .copied()
        .filter(|op| op.cyclomatic_complexity() >= min_complexity)
        .collect()
}
