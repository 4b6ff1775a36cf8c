//! Arithmetic operations over a list of operands.
//!
//! One request is one [`Operation`]: a kind plus the ordered operand
//! list. `calculate` is the single dispatch point; there is no trait
//! hierarchy behind it.

use crate::model::error::CalcError;

/// The four supported arithmetic reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Arithmetic sum of all operands.
    Sum,
    /// Left-to-right subtraction starting from the first operand.
    Difference,
    /// Left-to-right product, seeded at 1.
    Product,
    /// Left-to-right division starting from the first operand.
    Quotient,
}

impl OperationKind {
    /// User-facing name of the operation, as shown in results, the
    /// history view, and the export file.
    pub fn display_name(self) -> &'static str {
        match self {
            OperationKind::Sum => "Soma",
            OperationKind::Difference => "Subtração",
            OperationKind::Product => "Multiplicação",
            OperationKind::Quotient => "Divisão",
        }
    }
}

/// One arithmetic request: a kind and its ordered operands.
///
/// Immutable once constructed. Created per user request and consumed
/// once by [`Ledger::execute`](crate::state::Ledger::execute). The
/// operand limit is enforced by the validator *before* construction, so
/// an `Operation` in hand is already within bounds (though it may still
/// fail arithmetically, e.g. division by zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    operands: Vec<f64>,
}

impl Operation {
    /// Build an operation from a kind and operand list.
    pub fn new(kind: OperationKind, operands: Vec<f64>) -> Self {
        Self { kind, operands }
    }

    /// The operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The ordered operand list.
    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// User-facing name of this operation.
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Reduce the operand list to a single value.
    ///
    /// Double-precision floating point throughout; no overflow detection
    /// beyond what IEEE 754 provides. Division fails with
    /// [`CalcError::DivisionByZero`] the moment a zero divisor is seen,
    /// leaving the remaining operands unconsumed. All kinds fail with
    /// [`CalcError::EmptyInput`] on an empty operand list.
    pub fn calculate(&self) -> Result<f64, CalcError> {
        let (&first, rest) = self
            .operands
            .split_first()
            .ok_or(CalcError::EmptyInput)?;

        match self.kind {
            OperationKind::Sum => Ok(self.operands.iter().sum()),
            OperationKind::Difference => {
                Ok(rest.iter().fold(first, |acc, &x| acc - x))
            }
            OperationKind::Product => {
                Ok(self.operands.iter().fold(1.0, |acc, &x| acc * x))
            }
            OperationKind::Quotient => {
                let mut result = first;
                for &divisor in rest {
                    if divisor == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    result /= divisor;
                }
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(kind: OperationKind, operands: &[f64]) -> Operation {
        Operation::new(kind, operands.to_vec())
    }

    #[test]
    fn sum_adds_all_operands() {
        let result = op(OperationKind::Sum, &[10.0, 5.0, 3.0]).calculate();
        assert_eq!(result, Ok(18.0));
    }

    #[test]
    fn difference_subtracts_left_to_right() {
        let result = op(OperationKind::Difference, &[10.0, 5.0, 3.0]).calculate();
        assert_eq!(result, Ok(2.0));
    }

    #[test]
    fn difference_with_single_operand_is_identity() {
        let result = op(OperationKind::Difference, &[7.5]).calculate();
        assert_eq!(result, Ok(7.5));
    }

    #[test]
    fn product_multiplies_seeded_at_one() {
        let result = op(OperationKind::Product, &[10.0, 5.0, 3.0]).calculate();
        assert_eq!(result, Ok(150.0));
    }

    #[test]
    fn quotient_divides_left_to_right() {
        let result = op(OperationKind::Quotient, &[100.0, 5.0, 2.0]).calculate();
        assert_eq!(result, Ok(10.0));
    }

    #[test]
    fn quotient_fails_on_zero_divisor() {
        let result = op(OperationKind::Quotient, &[10.0, 0.0, 3.0]).calculate();
        assert_eq!(result, Err(CalcError::DivisionByZero));
    }

    #[test]
    fn quotient_allows_zero_as_first_operand() {
        let result = op(OperationKind::Quotient, &[0.0, 4.0]).calculate();
        assert_eq!(result, Ok(0.0));
    }

    #[test]
    fn quotient_short_circuits_at_the_first_zero() {
        // The trailing zero is never reached; the first one reports.
        let result = op(OperationKind::Quotient, &[8.0, 0.0, 0.0]).calculate();
        assert_eq!(result, Err(CalcError::DivisionByZero));
    }

    #[test]
    fn every_kind_rejects_empty_operands() {
        for kind in [
            OperationKind::Sum,
            OperationKind::Difference,
            OperationKind::Product,
            OperationKind::Quotient,
        ] {
            assert_eq!(
                op(kind, &[]).calculate(),
                Err(CalcError::EmptyInput),
                "{kind:?} should reject an empty operand list"
            );
        }
    }

    #[test]
    fn negative_operands_flow_through() {
        let result = op(OperationKind::Sum, &[-1.5, 2.5]).calculate();
        assert_eq!(result, Ok(1.0));
    }

    #[test]
    fn display_names_are_portuguese() {
        assert_eq!(OperationKind::Sum.display_name(), "Soma");
        assert_eq!(OperationKind::Difference.display_name(), "Subtração");
        assert_eq!(OperationKind::Product.display_name(), "Multiplicação");
        assert_eq!(OperationKind::Quotient.display_name(), "Divisão");
    }
}
