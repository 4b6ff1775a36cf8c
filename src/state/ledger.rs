//! The history ledger: executes operations and records their outcomes.

use crate::config::Settings;
use crate::model::{
    round_to, CalcError, HistoryEntry, HistoryError, Operation, SettingsError, Statistics,
};
use chrono::Local;
use tracing::{debug, info};

/// Timestamp format stored on history entries.
const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format embedded in export filenames.
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A rendered history export, ready to be persisted.
///
/// The ledger only produces the filename and content; writing the file
/// is the front-end's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryExport {
    /// Suggested filename, `historico_calculadora_<YYYYMMDD>_<HHMMSS>.txt`.
    pub filename: String,
    /// Full file content, one entry per line after the header.
    pub content: String,
}

/// Ordered record of executed operations plus the session settings.
///
/// Entries are appended in execution order and never mutated. The
/// ledger owns the session's [`Settings`]; precision and operand-limit
/// changes go through its delegating setters, so there is no aliased
/// configuration state anywhere else.
///
/// Error outcomes are not recorded: a failed `execute` leaves the entry
/// list untouched and only successful, rounded results are archived.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    entries: Vec<HistoryEntry>,
    settings: Settings,
}

impl Ledger {
    /// Create an empty ledger owning the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            entries: Vec::new(),
            settings,
        }
    }

    /// The settings currently in force.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the decimal precision; out-of-range values are rejected and
    /// the prior value kept.
    pub fn set_precision(&mut self, precision: u8) -> Result<(), SettingsError> {
        self.settings.set_precision(precision)?;
        info!(precision, "precision updated");
        Ok(())
    }

    /// Set the operand limit; out-of-range values are rejected and the
    /// prior value kept.
    pub fn set_max_operands(&mut self, max_operands: usize) -> Result<(), SettingsError> {
        self.settings.set_max_operands(max_operands)?;
        info!(max_operands, "operand limit updated");
        Ok(())
    }

    /// Execute an operation, archive the outcome, and format the result.
    ///
    /// On success the result is rounded to the current precision
    /// (half-away-from-zero, see [`round_to`]), a timestamped entry is
    /// appended, and the display string `Resultado da <nome>: <valor>`
    /// is returned. On failure the error is returned and nothing is
    /// recorded.
    pub fn execute(&mut self, operation: Operation) -> Result<String, CalcError> {
        let name = operation.display_name();

        let result = match operation.calculate() {
            Ok(raw) => round_to(raw, self.settings.precision()),
            Err(err) => {
                debug!(operation = name, %err, "operation failed, not recorded");
                return Err(err);
            }
        };

        let timestamp = Local::now().format(ENTRY_TIMESTAMP_FORMAT).to_string();
        info!(operation = name, result, "operation executed");

        self.entries.push(HistoryEntry::new(
            name,
            operation.operands().to_vec(),
            result,
            timestamp,
        ));

        Ok(format!("Resultado da {name}: {result}"))
    }

    /// Iterate the recorded entries in insertion (chronological) order.
    ///
    /// Read-only and restartable: each call yields a fresh iterator over
    /// the same entries.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean, max, and min over the recorded results.
    ///
    /// The mean is rounded to the current precision; max and min are the
    /// stored (already rounded) values. Fails with
    /// [`HistoryError::NoNumericResults`] on an empty ledger.
    pub fn statistics(&self) -> Result<Statistics, HistoryError> {
        Statistics::from_results(
            self.entries.iter().map(HistoryEntry::result),
            self.settings.precision(),
        )
        .ok_or(HistoryError::NoNumericResults)
    }

    /// Render the full history as an export file.
    ///
    /// The filename embeds the current local time; the content starts
    /// with the `Histórico de Operações` header followed by one line per
    /// entry. Fails with [`HistoryError::NothingToExport`] on an empty
    /// ledger. Persisting the file is the caller's job.
    pub fn export(&self) -> Result<HistoryExport, HistoryError> {
        if self.entries.is_empty() {
            return Err(HistoryError::NothingToExport);
        }

        let filename = format!(
            "historico_calculadora_{}.txt",
            Local::now().format(EXPORT_TIMESTAMP_FORMAT)
        );

        let mut content = String::from("Histórico de Operações\n\n");
        for entry in &self.entries {
            content.push_str(&entry.to_string());
            content.push('\n');
        }

        info!(filename = %filename, entries = self.entries.len(), "history exported");
        Ok(HistoryExport { filename, content })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
