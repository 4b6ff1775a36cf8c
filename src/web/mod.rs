//! Web form boundary contract (no server included).

pub mod form;

pub use form::{CalculateForm, OperationSlug, SettingsForm};
