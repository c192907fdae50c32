// ============================================================================
// Precision Conversion
// Lossless widening (match) and strategy-driven narrowing (set)
// ============================================================================

use super::MonetaryValue;
use crate::numeric::math::{checked_div_round, pow10, MAX_PRECISION};
use crate::numeric::{MoneyError, MoneyResult};
use crate::rounding::{round_half_to_even, RoundingStrategy};

impl MonetaryValue {
    /// Return an equivalent value whose precision is at least `precision`.
    ///
    /// Widening-only: when the value already has an equal or higher precision
    /// it is returned unchanged, so this never rounds and never loses
    /// information. This is the alignment primitive behind every binary
    /// operator.
    ///
    /// # Errors
    /// Invalid shape, invalid target precision, or an amount that can no
    /// longer be represented after scaling up.
    pub fn match_precision(self, precision: u8) -> MoneyResult<Self> {
        self.validate()?;
        if precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        if self.precision >= precision {
            return Ok(self);
        }
        let factor = pow10(precision - self.precision);
        let amount = self.amount.checked_mul(factor).ok_or({
            if self.amount < 0 {
                MoneyError::Underflow
            } else {
                MoneyError::Overflow
            }
        })?;
        Ok(Self {
            amount,
            precision,
            ..self
        })
    }

    /// Fast form of [`match_precision`](Self::match_precision): no
    /// validation, wrapping scale-up.
    #[inline]
    pub fn match_precision_unchecked(self, precision: u8) -> Self {
        if self.precision >= precision {
            return self;
        }
        let factor = pow10(precision - self.precision);
        Self {
            amount: self.amount.wrapping_mul(factor),
            precision,
            ..self
        }
    }

    /// Return a value at exactly `precision`, rounding half-to-even when
    /// narrowing. Widening behaves like [`match_precision`](Self::match_precision).
    ///
    /// This is the only lossy primitive in the core.
    ///
    /// # Errors
    /// Invalid shape, invalid target precision, or overflow on widening.
    pub fn set_precision(self, precision: u8) -> MoneyResult<Self> {
        self.set_precision_with(precision, round_half_to_even)
    }

    /// [`set_precision`](Self::set_precision) with an explicit strategy for
    /// the narrowing arm.
    pub fn set_precision_with<R: RoundingStrategy>(
        self,
        precision: u8,
        rounding: R,
    ) -> MoneyResult<Self> {
        self.validate()?;
        if precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        if self.precision < precision {
            return self.match_precision(precision);
        }
        let divider = pow10(self.precision - precision);
        let amount = checked_div_round(self.amount as i128, divider, &rounding)?;
        Ok(Self {
            amount,
            precision,
            ..self
        })
    }

    /// Fast form: no validation, wrapping arithmetic, explicit strategy.
    pub fn set_precision_unchecked<R: RoundingStrategy>(self, precision: u8, rounding: R) -> Self {
        if self.precision < precision {
            return self.match_precision_unchecked(precision);
        }
        let divider = pow10(self.precision - precision);
        let whole = self.amount.wrapping_div(divider);
        let numerator = self.amount.wrapping_rem(divider);
        Self {
            amount: rounding.round(whole, numerator, divider),
            precision,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::{round_away_from_zero, round_down, round_towards_zero};

    fn eur(amount: i64, precision: u8) -> MonetaryValue {
        MonetaryValue::new(amount, "EUR", precision).unwrap()
    }

    #[test]
    fn test_match_precision_is_fixed_point_at_own_precision() {
        let v = eur(314, 2);
        assert_eq!(v.match_precision(2).unwrap(), v);
        assert_eq!(v.match_precision(1).unwrap(), v);
    }

    #[test]
    fn test_match_precision_scales_up() {
        let v = eur(314, 2);
        let wide = v.match_precision(4).unwrap();
        assert_eq!(wide.amount, 31400);
        assert_eq!(wide.precision, 4);
        assert_eq!(wide.currency, v.currency);
    }

    #[test]
    fn test_match_precision_overflow() {
        let v = eur(i64::MAX / 10 + 1, 0);
        assert_eq!(v.match_precision(1), Err(MoneyError::Overflow));
        let n = eur(i64::MIN / 10 - 1, 0);
        assert_eq!(n.match_precision(1), Err(MoneyError::Underflow));
    }

    #[test]
    fn test_match_precision_rejects_invalid_target() {
        assert_eq!(eur(1, 0).match_precision(16), Err(MoneyError::InvalidPrecision));
    }

    #[test]
    fn test_set_precision_widening_equals_match_precision() {
        let v = eur(314, 2);
        assert_eq!(
            v.set_precision_with(4, round_down).unwrap(),
            v.match_precision(4).unwrap()
        );
    }

    #[test]
    fn test_set_precision_narrowing_rounds() {
        // EUR 3.14 -> precision 1, away from zero -> EUR 3.2
        let v = eur(314, 2);
        let narrowed = v.set_precision_with(1, round_away_from_zero).unwrap();
        assert_eq!(narrowed.amount, 32);
        assert_eq!(narrowed.precision, 1);
    }

    #[test]
    fn test_set_precision_default_is_half_to_even() {
        // 3.15 -> 3.2 (2 is even), 3.25 -> 3.2
        assert_eq!(eur(315, 2).set_precision(1).unwrap().amount, 32);
        assert_eq!(eur(325, 2).set_precision(1).unwrap().amount, 32);
    }

    #[test]
    fn test_set_precision_negative_amounts() {
        // EUR -3.14 -> precision 1
        let v = eur(-314, 2);
        assert_eq!(v.set_precision_with(1, round_towards_zero).unwrap().amount, -31);
        assert_eq!(
            v.set_precision_with(1, round_away_from_zero).unwrap().amount,
            -32
        );
        assert_eq!(v.set_precision_with(1, round_down).unwrap().amount, -32);
    }

    #[test]
    fn test_unchecked_forms_agree_on_valid_input() {
        let v = eur(314, 2);
        assert_eq!(v.match_precision_unchecked(4), v.match_precision(4).unwrap());
        assert_eq!(
            v.set_precision_unchecked(1, round_away_from_zero),
            v.set_precision_with(1, round_away_from_zero).unwrap()
        );
    }

    #[test]
    fn test_validating_form_rejects_invalid_shape() {
        let bad = MonetaryValue::new_unchecked(1, "", 2);
        assert_eq!(bad.match_precision(4), Err(MoneyError::InvalidCurrency));
    }
}
