//! Error types for the calculator engine.
//!
//! Each layer owns a small `thiserror` enum: [`CalcError`] for the
//! arithmetic core, [`ValidateError`] for operand input, [`SettingsError`]
//! for the bounded runtime settings, and [`HistoryError`] for ledger
//! queries. Display messages are the user-facing Portuguese strings; the
//! front-end prefixes them with `Erro: ` when reporting.
//!
//! All of these are recoverable: the command loop reports the message and
//! continues. Validation errors prevent an [`Operation`] from being
//! constructed at all, so the arithmetic core never sees malformed input.
//!
//! [`Operation`]: crate::model::Operation

use thiserror::Error;

/// Failures produced by [`Operation::calculate`](crate::model::Operation::calculate).
///
/// These are the only two ways an arithmetic reduction can fail; every
/// other malformed input is rejected by the validator before an
/// `Operation` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The operand list was empty.
    #[error("Nenhum número fornecido!")]
    EmptyInput,

    /// A divisor at position 1 or later was zero.
    ///
    /// Raised the moment the zero divisor is seen; remaining operands are
    /// not consumed.
    #[error("Divisão por zero não é permitida!")]
    DivisionByZero,
}

/// Failures produced by the operand input validator.
///
/// Token errors are evaluated in input order and short-circuit: the first
/// offending token is reported, not the last.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The raw input line was empty after trimming.
    #[error("Nenhuma entrada fornecida!")]
    EmptyInput,

    /// More tokens were supplied than the configured operand limit.
    ///
    /// Checked against the token count before any token is parsed.
    #[error("Limite de {limit} números excedido!")]
    TooManyOperands {
        /// The operand limit in force when the input was rejected.
        limit: usize,
    },

    /// A token was empty or not a valid numeric literal.
    #[error("'{token}' não é um número válido!")]
    InvalidToken {
        /// The offending token, verbatim.
        token: String,
    },

    /// A token parsed to a value outside the representable `f64` range.
    #[error("'{token}' excede os limites numéricos!")]
    OutOfFloatRange {
        /// The offending token, verbatim.
        token: String,
    },

    /// The web form named an operation outside the known vocabulary.
    #[error("Operação desconhecida: '{slug}'")]
    UnknownOperation {
        /// The unrecognized operation slug.
        slug: String,
    },
}

/// Failures produced by the validating settings setters.
///
/// The prior value is left unchanged when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Requested decimal precision outside `[0, 10]`.
    #[error("Precisão deve estar entre 0 e 10!")]
    PrecisionOutOfRange {
        /// The rejected precision.
        value: u8,
    },

    /// Requested operand limit outside `[2, 100]`.
    #[error("Limite deve estar entre 2 e 100!")]
    LimitOutOfRange {
        /// The rejected limit.
        value: usize,
    },
}

/// Failures produced by ledger queries over the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Statistics were requested but no numeric results are recorded.
    ///
    /// Since error outcomes are never archived, this only occurs while
    /// the ledger is empty.
    #[error("Nenhum resultado numérico no histórico.")]
    NoNumericResults,

    /// An export was requested on an empty ledger.
    #[error("Nenhum histórico para exportar.")]
    NothingToExport,
}
