//! Decimal rounding of displayed results.
//!
//! Precision only affects how results are rounded for display and
//! storage in the ledger; operand values are never rounded.

/// Round `value` to `precision` decimal places.
///
/// Rounding is half-away-from-zero (the `f64::round` rule applied after
/// decimal scaling), not banker's rounding: `0.125` at precision 2 gives
/// `0.13`, `-0.125` gives `-0.13`. Precision is bounded to `[0, 10]` by
/// [`Settings`](crate::config::Settings), so the scale factor stays well
/// inside `f64` range.
///
/// Rounding is idempotent: re-rounding an already-rounded value at the
/// same precision returns it unchanged.
pub fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(2.666_666, 2), 2.67);
        assert_eq!(round_to(2.664, 2), 2.66);
    }

    #[test]
    fn precision_zero_rounds_to_integers() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn idempotent_at_the_same_precision() {
        for &value in &[18.0, 2.67, -0.13, 123.456_789, 1e-9] {
            let once = round_to(value, 2);
            assert_eq!(round_to(once, 2), once);
        }
    }

    #[test]
    fn already_exact_values_are_unchanged() {
        assert_eq!(round_to(18.0, 2), 18.0);
        assert_eq!(round_to(-5.25, 2), -5.25);
    }
}
