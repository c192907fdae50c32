// ============================================================================
// Conversions
// Float coercions, the "CUR -12.34" string codec and rust_decimal interop
// ============================================================================

use super::{Currency, MonetaryValue};
use crate::numeric::math::{pow10, try_narrow, MAX_PRECISION};
use crate::numeric::{MoneyError, MoneyResult};
use crate::rounding::{round_half_to_even, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_F64: f64 = 9_007_199_254_740_992.0;

impl MonetaryValue {
    /// Build a value from a float, rounding the sub-precision part
    /// half-to-even.
    ///
    /// # Errors
    /// Invalid currency or precision, a non-finite input, or a scaled value
    /// outside the exactly-representable float range.
    pub fn from_f64(number: f64, currency: &str, precision: u8) -> MoneyResult<Self> {
        Self::from_f64_with(number, currency, precision, round_half_to_even)
    }

    /// [`from_f64`](Self::from_f64) with an explicit rounding strategy.
    pub fn from_f64_with<R: RoundingStrategy>(
        number: f64,
        currency: &str,
        precision: u8,
        rounding: R,
    ) -> MoneyResult<Self> {
        let currency = Currency::new(currency)?;
        if precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        if !number.is_finite() {
            return Err(MoneyError::InvalidInput);
        }
        let scaled = number * pow10(precision) as f64;
        let whole = scaled.floor();
        if whole.abs() > MAX_SAFE_F64 {
            return Err(MoneyError::Overflow);
        }
        // The leftover fraction is resolved over a denominator of 100, which
        // keeps exact halves exact (an exact half scales to exactly 50).
        let numerator = ((scaled - whole) * 100.0).round() as i64;
        let amount = rounding.round(whole as i64, numerator, 100);
        Ok(Self {
            amount,
            currency,
            precision,
        })
    }

    /// Fast form: no checks; non-finite or out-of-range inputs saturate.
    pub fn from_f64_unchecked<R: RoundingStrategy>(
        number: f64,
        currency: &str,
        precision: u8,
        rounding: R,
    ) -> Self {
        let scaled = number * pow10(precision) as f64;
        let whole = scaled.floor();
        let numerator = ((scaled - whole) * 100.0).round() as i64;
        Self {
            amount: rounding.round(whole as i64, numerator, 100),
            currency: Currency::new_unchecked(currency),
            precision,
        }
    }

    /// The decimal value as a float: `amount / 10^precision`.
    ///
    /// # Errors
    /// Invalid shape.
    pub fn to_f64(&self) -> MoneyResult<f64> {
        self.validate()?;
        Ok(self.to_f64_unchecked())
    }

    #[inline]
    pub fn to_f64_unchecked(&self) -> f64 {
        self.amount as f64 / pow10(self.precision) as f64
    }

    /// Convert from a `rust_decimal::Decimal` at an API boundary.
    ///
    /// The decimal is normalized first so trailing zeros don't inflate the
    /// precision.
    ///
    /// # Errors
    /// `PrecisionLoss` when the decimal carries more than [`MAX_PRECISION`]
    /// places, `InvalidCurrency`, or a mantissa outside i64.
    pub fn from_decimal(value: rust_decimal::Decimal, currency: &str) -> MoneyResult<Self> {
        let currency = Currency::new(currency)?;
        let value = value.normalize();
        let scale = value.scale();
        if scale > MAX_PRECISION as u32 {
            return Err(MoneyError::PrecisionLoss);
        }
        Ok(Self {
            amount: try_narrow(value.mantissa())?,
            currency,
            precision: scale as u8,
        })
    }

    /// Convert to a `rust_decimal::Decimal` for display or interop.
    ///
    /// # Errors
    /// Invalid shape.
    pub fn to_decimal(&self) -> MoneyResult<rust_decimal::Decimal> {
        self.validate()?;
        Ok(rust_decimal::Decimal::from_i128_with_scale(
            self.amount as i128,
            self.precision as u32,
        ))
    }
}

impl fmt::Display for MonetaryValue {
    /// Formats as `"EUR -12.34"`: currency tag, space, signed decimal with
    /// exactly `precision` places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.unsigned_abs();
        if self.precision == 0 {
            return write!(f, "{} {}{}", self.currency, sign, magnitude);
        }
        let scale = pow10(self.precision) as u64;
        write!(
            f,
            "{} {}{}.{:0>width$}",
            self.currency,
            sign,
            magnitude / scale,
            magnitude % scale,
            width = self.precision as usize
        )
    }
}

impl FromStr for MonetaryValue {
    type Err = MoneyError;

    /// Parse the `"EUR -12.34"` shape produced by `Display`. The precision is
    /// the number of digits after the decimal point; a missing point means
    /// precision 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, number) = s.rsplit_once(' ').ok_or(MoneyError::InvalidInput)?;
        let currency = Currency::new(tag)?;

        let (is_negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number.strip_prefix('+').unwrap_or(number)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, fr)) => (w, fr),
            None => (digits, ""),
        };
        if digits.contains('.') && fraction.is_empty() {
            return Err(MoneyError::InvalidInput);
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyError::InvalidInput);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MoneyError::InvalidInput);
        }
        if fraction.len() > MAX_PRECISION as usize {
            return Err(MoneyError::InvalidPrecision);
        }

        let mut amount: i64 = 0;
        for b in whole.bytes().chain(fraction.bytes()) {
            amount = amount
                .checked_mul(10)
                .and_then(|a| a.checked_add((b - b'0') as i64))
                .ok_or(MoneyError::Overflow)?;
        }
        if is_negative {
            amount = -amount;
        }

        Ok(Self {
            amount,
            currency,
            precision: fraction.len() as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::round_towards_zero;

    fn eur(amount: i64, precision: u8) -> MonetaryValue {
        MonetaryValue::new(amount, "EUR", precision).unwrap()
    }

    #[test]
    fn test_from_f64() {
        let v = MonetaryValue::from_f64(3.14, "EUR", 2).unwrap();
        assert_eq!(v.amount, 314);
        assert_eq!(v.precision, 2);

        let neg = MonetaryValue::from_f64(-0.125, "EUR", 2).unwrap();
        // -0.125 scales to -12.5; half-to-even resolves to -12
        assert_eq!(neg.amount, -12);
    }

    #[test]
    fn test_from_f64_with_strategy() {
        let v = MonetaryValue::from_f64_with(3.149, "EUR", 2, round_towards_zero).unwrap();
        assert_eq!(v.amount, 314);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq!(
            MonetaryValue::from_f64(f64::NAN, "EUR", 2),
            Err(MoneyError::InvalidInput)
        );
        assert_eq!(
            MonetaryValue::from_f64(f64::INFINITY, "EUR", 2),
            Err(MoneyError::InvalidInput)
        );
    }

    #[test]
    fn test_from_f64_rejects_unsafe_range() {
        assert_eq!(
            MonetaryValue::from_f64(1e20, "EUR", 0),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_f64_round_trip_in_small_range() {
        for &amount in &[0i64, 1, -1, 314, -4200, 999_999] {
            for precision in 0..=4u8 {
                let v = eur(amount, precision);
                let back =
                    MonetaryValue::from_f64(v.to_f64().unwrap(), "EUR", precision).unwrap();
                assert_eq!(back, v, "round trip failed for {amount}/{precision}");
            }
        }
    }

    #[test]
    fn test_f64_round_trip_on_fast_surface() {
        let v = eur(-4200, 4);
        let back = MonetaryValue::from_f64_unchecked(
            v.to_f64_unchecked(),
            "EUR",
            4,
            crate::rounding::round_half_to_even,
        );
        assert_eq!(back, v);
    }

    #[test]
    fn test_display() {
        assert_eq!(eur(314, 2).to_string(), "EUR 3.14");
        assert_eq!(eur(-314, 2).to_string(), "EUR -3.14");
        assert_eq!(eur(34, 3).to_string(), "EUR 0.034");
        assert_eq!(eur(-34, 3).to_string(), "EUR -0.034");
        assert_eq!(eur(42, 0).to_string(), "EUR 42");
    }

    #[test]
    fn test_from_str() {
        let v: MonetaryValue = "EUR 3.14".parse().unwrap();
        assert_eq!(v, eur(314, 2));

        let neg: MonetaryValue = "EUR -0.034".parse().unwrap();
        assert_eq!(neg, eur(-34, 3));

        let whole: MonetaryValue = "USD 42".parse().unwrap();
        assert_eq!(whole.amount, 42);
        assert_eq!(whole.precision, 0);

        let plus: MonetaryValue = "EUR +1.5".parse().unwrap();
        assert_eq!(plus.amount, 15);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("".parse::<MonetaryValue>().is_err());
        assert!("EUR".parse::<MonetaryValue>().is_err());
        assert!("EUR 1.2.3".parse::<MonetaryValue>().is_err());
        assert!("EUR abc".parse::<MonetaryValue>().is_err());
        assert!("EUR 1.".parse::<MonetaryValue>().is_err());
        assert_eq!(
            "EUR 0.1234567890123456".parse::<MonetaryValue>(),
            Err(MoneyError::InvalidPrecision)
        );
    }

    #[test]
    fn test_string_round_trip() {
        for v in [eur(314, 2), eur(-34, 3), eur(0, 0), eur(123456, 4)] {
            let parsed: MonetaryValue = v.to_string().parse().unwrap();
            assert_eq!(parsed, v);
        }
    }

    #[test]
    fn test_decimal_interop() {
        let d = rust_decimal::Decimal::new(12345, 2); // 123.45
        let v = MonetaryValue::from_decimal(d, "EUR").unwrap();
        assert_eq!(v.amount, 12345);
        assert_eq!(v.precision, 2);
        assert_eq!(v.to_decimal().unwrap(), d);
    }

    #[test]
    fn test_decimal_normalizes_trailing_zeros() {
        let d = rust_decimal::Decimal::new(31400, 4); // 3.1400
        let v = MonetaryValue::from_decimal(d, "EUR").unwrap();
        assert_eq!(v.amount, 314);
        assert_eq!(v.precision, 2);
    }

    #[test]
    fn test_decimal_rejects_excess_precision() {
        let d = rust_decimal::Decimal::new(1, 20);
        assert_eq!(
            MonetaryValue::from_decimal(d, "EUR"),
            Err(MoneyError::PrecisionLoss)
        );
    }
}
