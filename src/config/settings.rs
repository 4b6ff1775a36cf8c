//! Runtime calculator settings with validated bounds.

use crate::model::SettingsError;
use std::ops::RangeInclusive;

/// Allowed decimal precision values.
pub const PRECISION_RANGE: RangeInclusive<u8> = 0..=10;

/// Allowed numbers-per-operation limits.
pub const OPERAND_LIMIT_RANGE: RangeInclusive<usize> = 2..=100;

/// The two bounded numeric settings used by the ledger and validator.
///
/// Fields are private: mutation goes through the validating setters
/// only, and a rejected value leaves the prior one unchanged. Precision
/// affects how results are rounded for display and storage; it never
/// alters stored operand values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    precision: u8,
    max_operands: usize,
}

impl Default for Settings {
    /// Two decimal places, at most ten numbers per operation.
    fn default() -> Self {
        Self {
            precision: 2,
            max_operands: 10,
        }
    }
}

impl Settings {
    /// Build settings from explicit values, validating both bounds.
    pub fn new(precision: u8, max_operands: usize) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.set_precision(precision)?;
        settings.set_max_operands(max_operands)?;
        Ok(settings)
    }

    /// Decimal places retained when rounding a result.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Maximum count of numbers accepted in a single operation.
    pub fn max_operands(&self) -> usize {
        self.max_operands
    }

    /// Set the decimal precision, rejecting values outside `[0, 10]`.
    pub fn set_precision(&mut self, precision: u8) -> Result<(), SettingsError> {
        if !PRECISION_RANGE.contains(&precision) {
            return Err(SettingsError::PrecisionOutOfRange { value: precision });
        }
        self.precision = precision;
        Ok(())
    }

    /// Set the operand limit, rejecting values outside `[2, 100]`.
    pub fn set_max_operands(&mut self, max_operands: usize) -> Result<(), SettingsError> {
        if !OPERAND_LIMIT_RANGE.contains(&max_operands) {
            return Err(SettingsError::LimitOutOfRange {
                value: max_operands,
            });
        }
        self.max_operands = max_operands;
        Ok(())
    }
}
