// ============================================================================
// Comparison Engine
// One total order behind every predicate: align precisions, compare amounts
// ============================================================================

use super::MonetaryValue;
use crate::numeric::math::pow10;
use crate::numeric::MoneyResult;
use std::cmp::Ordering;

/// Align both amounts to the higher precision, in i128 so the scale-up can
/// never overflow (|i64| · 10^15 fits comfortably).
#[inline]
pub(crate) fn aligned_amounts(a: &MonetaryValue, b: &MonetaryValue) -> (i128, i128) {
    match a.precision.cmp(&b.precision) {
        Ordering::Equal => (a.amount as i128, b.amount as i128),
        Ordering::Greater => (
            a.amount as i128,
            b.amount as i128 * pow10(a.precision - b.precision) as i128,
        ),
        Ordering::Less => (
            a.amount as i128 * pow10(b.precision - a.precision) as i128,
            b.amount as i128,
        ),
    }
}

impl MonetaryValue {
    /// Total order over same-currency values, precision-agnostic.
    ///
    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.validate()?;
        other.validate()?;
        self.require_same_currency(other)?;
        Ok(self.compare_unchecked(other))
    }

    /// Fast form: no validation, no currency check.
    #[inline]
    pub fn compare_unchecked(&self, other: &Self) -> Ordering {
        let (a, b) = aligned_amounts(self, other);
        a.cmp(&b)
    }

    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    #[inline]
    pub fn less_than_unchecked(&self, other: &Self) -> bool {
        self.compare_unchecked(other) == Ordering::Less
    }

    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    #[inline]
    pub fn less_than_or_equal_unchecked(&self, other: &Self) -> bool {
        self.compare_unchecked(other) != Ordering::Greater
    }

    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    #[inline]
    pub fn greater_than_unchecked(&self, other: &Self) -> bool {
        self.compare_unchecked(other) == Ordering::Greater
    }

    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    #[inline]
    pub fn greater_than_or_equal_unchecked(&self, other: &Self) -> bool {
        self.compare_unchecked(other) != Ordering::Less
    }

    /// Same decimal value, any precision; requires a shared currency.
    ///
    /// # Errors
    /// Invalid shape or mismatched currencies.
    pub fn equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    #[inline]
    pub fn equal_unchecked(&self, other: &Self) -> bool {
        self.compare_unchecked(other) == Ordering::Equal
    }

    /// Same decimal value and same currency, any precision. Unlike
    /// [`equal`](Self::equal), a currency mismatch yields `false` instead of
    /// an error.
    ///
    /// # Errors
    /// Invalid shape only.
    pub fn equivalent(&self, other: &Self) -> MoneyResult<bool> {
        self.validate()?;
        other.validate()?;
        Ok(self.equivalent_unchecked(other))
    }

    #[inline]
    pub fn equivalent_unchecked(&self, other: &Self) -> bool {
        self.currency == other.currency && self.equal_unchecked(other)
    }

    /// Exact triple equality: amount, currency and precision all match.
    ///
    /// # Errors
    /// Invalid shape only.
    pub fn identical(&self, other: &Self) -> MoneyResult<bool> {
        self.validate()?;
        other.validate()?;
        Ok(self.identical_unchecked(other))
    }

    #[inline]
    pub fn identical_unchecked(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MoneyError;

    fn mv(amount: i64, currency: &str, precision: u8) -> MonetaryValue {
        MonetaryValue::new(amount, currency, precision).unwrap()
    }

    #[test]
    fn test_compare_across_precisions() {
        // 3.1400 == 3.14 despite differing amount and precision
        let a = mv(31400, "EUR", 4);
        let b = mv(314, "EUR", 2);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Equal);
        assert_eq!(mv(315, "EUR", 2).compare(&a).unwrap(), Ordering::Greater);
        assert_eq!(mv(313, "EUR", 2).compare(&a).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_compare_requires_same_currency() {
        let a = mv(1, "EUR", 0);
        let b = mv(1, "USD", 0);
        assert_eq!(a.compare(&b), Err(MoneyError::CurrencyMismatch));
        // fast form compares numerically regardless
        assert_eq!(a.compare_unchecked(&b), Ordering::Equal);
    }

    #[test]
    fn test_compare_never_overflows_alignment() {
        let a = mv(i64::MAX, "EUR", 0);
        let b = mv(1, "EUR", 15);
        assert_eq!(a.compare(&b).unwrap(), Ordering::Greater);
        assert_eq!(b.compare(&a).unwrap(), Ordering::Less);
        let c = mv(i64::MIN, "EUR", 0);
        assert_eq!(c.compare(&b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_ordering_predicates() {
        let small = mv(100, "EUR", 2);
        let large = mv(200, "EUR", 2);
        assert!(small.less_than(&large).unwrap());
        assert!(small.less_than_or_equal(&small).unwrap());
        assert!(large.greater_than(&small).unwrap());
        assert!(large.greater_than_or_equal(&large).unwrap());
        assert!(!small.greater_than(&large).unwrap());
    }

    #[test]
    fn test_equal_and_equivalent() {
        let a = mv(3140, "EUR", 3);
        let b = mv(314, "EUR", 2);
        assert!(a.equal(&b).unwrap());
        assert!(a.equivalent(&b).unwrap());

        let usd = mv(3140, "USD", 3);
        assert_eq!(a.equal(&usd), Err(MoneyError::CurrencyMismatch));
        assert!(!a.equivalent(&usd).unwrap());
    }

    #[test]
    fn test_identical_requires_exact_triple() {
        let a = mv(3140, "EUR", 3);
        let b = mv(314, "EUR", 2);
        assert!(!a.identical(&b).unwrap());
        assert!(a.identical(&a).unwrap());
    }

    #[test]
    fn test_zero_amounts_are_equal() {
        let a = mv(0, "EUR", 0);
        let b = mv(0, "EUR", 5);
        assert!(a.equal(&b).unwrap());
    }
}
