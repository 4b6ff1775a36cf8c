//! History entries recorded by the ledger.

use std::fmt;

/// One archived operation: name, operands, rounded result, timestamp.
///
/// Created by the ledger when an operation executes successfully and
/// never mutated afterwards. Error outcomes are not archived, so the
/// result is always numeric. The timestamp is a preformatted local-time
/// string (`%Y-%m-%d %H:%M:%S`).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    operation_name: String,
    operands: Vec<f64>,
    result: f64,
    timestamp: String,
}

impl HistoryEntry {
    /// Build an entry. Only the ledger constructs these.
    pub(crate) fn new(
        operation_name: impl Into<String>,
        operands: Vec<f64>,
        result: f64,
        timestamp: String,
    ) -> Self {
        Self {
            operation_name: operation_name.into(),
            operands,
            result,
            timestamp,
        }
    }

    /// Name of the executed operation ("Soma", "Divisão", ...).
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// The operand list as entered, unrounded.
    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// The result, already rounded to the precision in force at
    /// execution time.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Local time of execution, preformatted.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Renders the line shared by the history view and the export file:
/// `<nome> de [<op1, op2, ...>] = <resultado> (<timestamp>)`.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} de [{}] = {} ({})",
            self.operation_name,
            join_numbers(&self.operands),
            self.result,
            self.timestamp
        )
    }
}

/// Comma-join numbers using the shortest round-trip rendering, so `10.0`
/// prints as `10` and `2.5` as `2.5`.
pub(crate) fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
