// ============================================================================
// Arithmetic Operators
// Unary, additive and multiplicative operators over aligned precisions
// ============================================================================

use super::compare::aligned_amounts;
use super::MonetaryValue;
use crate::numeric::math::{checked_div_round, pow10, try_narrow, MAX_PRECISION};
use crate::numeric::{MoneyError, MoneyResult};
use crate::rounding::{round_half_to_even, RoundingStrategy};
use std::cmp::Ordering;

impl MonetaryValue {
    /// Negate the amount. An involution: `negate(negate(v)) == v`.
    ///
    /// # Errors
    /// Invalid shape, or `Overflow` for `i64::MIN`.
    pub fn negate(self) -> MoneyResult<Self> {
        self.validate()?;
        let amount = self.amount.checked_neg().ok_or(MoneyError::Overflow)?;
        Ok(Self { amount, ..self })
    }

    #[inline]
    pub fn negate_unchecked(self) -> Self {
        Self {
            amount: self.amount.wrapping_neg(),
            ..self
        }
    }

    /// Absolute value of the amount. Idempotent.
    ///
    /// # Errors
    /// Invalid shape, or `Overflow` for `i64::MIN`.
    pub fn absolute(self) -> MoneyResult<Self> {
        self.validate()?;
        let amount = self.amount.checked_abs().ok_or(MoneyError::Overflow)?;
        Ok(Self { amount, ..self })
    }

    #[inline]
    pub fn absolute_unchecked(self) -> Self {
        Self {
            amount: self.amount.wrapping_abs(),
            ..self
        }
    }

    /// Add two same-currency values. Operands are aligned to the higher
    /// precision; the result carries that precision.
    ///
    /// # Errors
    /// Invalid shape, mismatched currencies, or a result outside i64.
    pub fn add(self, other: Self) -> MoneyResult<Self> {
        self.validate()?;
        other.validate()?;
        self.require_same_currency(&other)?;
        let (a, b) = aligned_amounts(&self, &other);
        Ok(Self {
            amount: try_narrow(a + b)?,
            currency: self.currency,
            precision: self.precision.max(other.precision),
        })
    }

    /// Fast form: no validation and no currency check; the result takes the
    /// first operand's currency.
    pub fn add_unchecked(self, other: Self) -> Self {
        let a = self.match_precision_unchecked(other.precision);
        let b = other.match_precision_unchecked(self.precision);
        Self {
            amount: a.amount.wrapping_add(b.amount),
            currency: a.currency,
            precision: a.precision,
        }
    }

    /// Subtract `other` from `self`. Anticommutative with [`add`](Self::add)
    /// via [`negate`](Self::negate).
    ///
    /// # Errors
    /// Invalid shape, mismatched currencies, or a result outside i64.
    pub fn subtract(self, other: Self) -> MoneyResult<Self> {
        self.validate()?;
        other.validate()?;
        self.require_same_currency(&other)?;
        let (a, b) = aligned_amounts(&self, &other);
        Ok(Self {
            amount: try_narrow(a - b)?,
            currency: self.currency,
            precision: self.precision.max(other.precision),
        })
    }

    /// Fast form of [`subtract`](Self::subtract).
    pub fn subtract_unchecked(self, other: Self) -> Self {
        let a = self.match_precision_unchecked(other.precision);
        let b = other.match_precision_unchecked(self.precision);
        Self {
            amount: a.amount.wrapping_sub(b.amount),
            currency: a.currency,
            precision: a.precision,
        }
    }

    /// Multiply by the decimal factor `factor / 10^factor_precision`,
    /// rounding half-to-even. Precision and currency are preserved.
    ///
    /// # Errors
    /// Invalid shape, invalid factor precision, or a result outside i64.
    pub fn multiply(self, factor: i64, factor_precision: u8) -> MoneyResult<Self> {
        self.multiply_with(factor, factor_precision, round_half_to_even)
    }

    /// [`multiply`](Self::multiply) with an explicit rounding strategy.
    pub fn multiply_with<R: RoundingStrategy>(
        self,
        factor: i64,
        factor_precision: u8,
        rounding: R,
    ) -> MoneyResult<Self> {
        self.validate()?;
        if factor_precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        let product = self.amount as i128 * factor as i128;
        let amount = checked_div_round(product, pow10(factor_precision), &rounding)?;
        Ok(Self { amount, ..self })
    }

    /// Fast form: wrapping product, no checks.
    pub fn multiply_unchecked<R: RoundingStrategy>(
        self,
        factor: i64,
        factor_precision: u8,
        rounding: R,
    ) -> Self {
        let scaled = Self {
            amount: self.amount.wrapping_mul(factor),
            ..self
        };
        scaled.integer_divide_unchecked(pow10(factor_precision), rounding)
    }

    /// Divide the amount by an integer divider, rounding half-to-even.
    /// Precision and currency are preserved.
    ///
    /// # Errors
    /// Invalid shape or a zero divider.
    pub fn integer_divide(self, divider: i64) -> MoneyResult<Self> {
        self.integer_divide_with(divider, round_half_to_even)
    }

    /// [`integer_divide`](Self::integer_divide) with an explicit strategy.
    pub fn integer_divide_with<R: RoundingStrategy>(
        self,
        divider: i64,
        rounding: R,
    ) -> MoneyResult<Self> {
        self.validate()?;
        let amount = checked_div_round(self.amount as i128, divider, &rounding)?;
        Ok(Self { amount, ..self })
    }

    /// Fast form: no checks. Panics on a zero divider.
    pub fn integer_divide_unchecked<R: RoundingStrategy>(self, divider: i64, rounding: R) -> Self {
        let whole = self.amount.wrapping_div(divider);
        let mut numerator = self.amount.wrapping_rem(divider);
        let mut denominator = divider;
        if denominator < 0 {
            numerator = numerator.wrapping_neg();
            denominator = denominator.wrapping_neg();
        }
        Self {
            amount: rounding.round(whole, numerator, denominator),
            ..self
        }
    }

    /// Divide by the decimal divider `divider / 10^divider_precision`,
    /// rounding half-to-even. Equivalent to
    /// [`integer_divide`](Self::integer_divide) when `divider_precision` is 0.
    ///
    /// # Errors
    /// Invalid shape, invalid divider precision, a zero divider, or a result
    /// outside i64.
    pub fn divide(self, divider: i64, divider_precision: u8) -> MoneyResult<Self> {
        self.divide_with(divider, divider_precision, round_half_to_even)
    }

    /// [`divide`](Self::divide) with an explicit rounding strategy.
    pub fn divide_with<R: RoundingStrategy>(
        self,
        divider: i64,
        divider_precision: u8,
        rounding: R,
    ) -> MoneyResult<Self> {
        self.validate()?;
        if divider_precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        let scaled = self.amount as i128 * pow10(divider_precision) as i128;
        let amount = checked_div_round(scaled, divider, &rounding)?;
        Ok(Self { amount, ..self })
    }

    /// Fast form: wrapping scale-up, no checks. Panics on a zero divider.
    pub fn divide_unchecked<R: RoundingStrategy>(
        self,
        divider: i64,
        divider_precision: u8,
        rounding: R,
    ) -> Self {
        let scaled = Self {
            amount: self.amount.wrapping_mul(pow10(divider_precision)),
            ..self
        };
        scaled.integer_divide_unchecked(divider, rounding)
    }

    /// The greater of two values by decimal value. On an exact tie the
    /// operand with the lower precision (simpler representation) wins.
    /// Cross-currency inputs are permitted; the caller owns that policy.
    ///
    /// # Errors
    /// Invalid shape only.
    pub fn maximum(self, other: Self) -> MoneyResult<Self> {
        self.validate()?;
        other.validate()?;
        Ok(self.maximum_unchecked(other))
    }

    pub fn maximum_unchecked(self, other: Self) -> Self {
        match self.compare_unchecked(&other) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                if self.precision <= other.precision {
                    self
                } else {
                    other
                }
            },
        }
    }

    /// The lesser of two values by decimal value. On an exact tie the operand
    /// with the higher precision wins.
    ///
    /// # Errors
    /// Invalid shape only.
    pub fn minimum(self, other: Self) -> MoneyResult<Self> {
        self.validate()?;
        other.validate()?;
        Ok(self.minimum_unchecked(other))
    }

    pub fn minimum_unchecked(self, other: Self) -> Self {
        match self.compare_unchecked(&other) {
            Ordering::Greater => other,
            Ordering::Less => self,
            Ordering::Equal => {
                if self.precision >= other.precision {
                    self
                } else {
                    other
                }
            },
        }
    }
}
