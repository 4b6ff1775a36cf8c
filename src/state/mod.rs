//! Session state: the history ledger and its owned settings.

pub mod ledger;

pub use ledger::{HistoryExport, Ledger};
