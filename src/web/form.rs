//! Typed web form boundary.
//!
//! The web variant submits POST fields `numeros` (space-delimited
//! numeric string), `operacao` (an [`OperationSlug`]), `precisao`, and
//! `limite`. This module types that vocabulary and routes it through
//! the same validator and setters as the terminal front-end, so the
//! operand limit and float-range checks apply on this path too. HTTP
//! serving, HTML rendering, and session storage stay outside this
//! crate.

use crate::config::Settings;
use crate::model::{Operation, OperationKind, SettingsError, ValidateError};
use crate::parser::parse_operands;
use crate::state::Ledger;
use serde::Deserialize;
use std::str::FromStr;

/// Lowercase operation identifier used by the form vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationSlug {
    /// `somar` → sum.
    Somar,
    /// `subtrair` → difference.
    Subtrair,
    /// `multiplicar` → product.
    Multiplicar,
    /// `dividir` → quotient.
    Dividir,
}

impl OperationSlug {
    /// The operation kind this slug names.
    pub fn kind(self) -> OperationKind {
        match self {
            OperationSlug::Somar => OperationKind::Sum,
            OperationSlug::Subtrair => OperationKind::Difference,
            OperationSlug::Multiplicar => OperationKind::Product,
            OperationSlug::Dividir => OperationKind::Quotient,
        }
    }
}

impl FromStr for OperationSlug {
    type Err = ValidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "somar" => Ok(OperationSlug::Somar),
            "subtrair" => Ok(OperationSlug::Subtrair),
            "multiplicar" => Ok(OperationSlug::Multiplicar),
            "dividir" => Ok(OperationSlug::Dividir),
            other => Err(ValidateError::UnknownOperation {
                slug: other.to_string(),
            }),
        }
    }
}

/// The `calcular` form: an operand string and an operation slug.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculateForm {
    /// Space-delimited numeric string, as typed into the form field.
    pub numeros: String,
    /// Which operation to run.
    pub operacao: OperationSlug,
}

impl CalculateForm {
    /// Validate the operand string against the session settings and
    /// build the operation.
    ///
    /// Uses the shared validator, so the operand limit and float-range
    /// checks behave exactly as on the terminal path.
    pub fn to_operation(&self, settings: &Settings) -> Result<Operation, ValidateError> {
        let operands = parse_operands(&self.numeros, settings.max_operands())?;
        Ok(Operation::new(self.operacao.kind(), operands))
    }
}

/// The settings form: either field may be submitted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SettingsForm {
    /// New decimal precision, when the `set_precisao` button was used.
    #[serde(default)]
    pub precisao: Option<u8>,

    /// New operand limit, when the `set_limite` button was used.
    #[serde(default)]
    pub limite: Option<usize>,
}

impl SettingsForm {
    /// Apply the submitted fields to the session ledger.
    ///
    /// Returns one confirmation message per applied field. Handling is
    /// sequential: a rejected value aborts with the setter's error, and
    /// the first field may already have been applied by then.
    pub fn apply(&self, ledger: &mut Ledger) -> Result<Vec<String>, SettingsError> {
        let mut confirmations = Vec::new();

        if let Some(precisao) = self.precisao {
            ledger.set_precision(precisao)?;
            confirmations.push(format!("Precisão ajustada para {precisao} casas."));
        }
        if let Some(limite) = self.limite {
            ledger.set_max_operands(limite)?;
            confirmations.push(format!("Limite ajustado para {limite} números."));
        }

        Ok(confirmations)
    }
}
