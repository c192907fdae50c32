// ============================================================================
// Monetary Value
// The (amount, currency, precision) triple and its validity predicate
// ============================================================================

mod allocate;
mod arithmetic;
mod compare;
mod convert;
mod precision;

use crate::numeric::math::MAX_PRECISION;
use crate::numeric::{MoneyError, MoneyResult};
use arrayvec::ArrayString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum byte length of a currency tag stored inline.
pub const CURRENCY_MAX_LEN: usize = 12;

/// An opaque currency tag.
///
/// Two currencies are equal iff their tags are byte-equal. The tag is stored
/// inline so the whole monetary value stays `Copy`. An empty tag is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency(ArrayString<CURRENCY_MAX_LEN>);

impl Currency {
    /// Create a currency tag, rejecting empty or oversized tags.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` if the tag is empty or longer than
    /// [`CURRENCY_MAX_LEN`] bytes.
    pub fn new(tag: &str) -> MoneyResult<Self> {
        if tag.is_empty() {
            return Err(MoneyError::InvalidCurrency);
        }
        ArrayString::from(tag)
            .map(Self)
            .map_err(|_| MoneyError::InvalidCurrency)
    }

    /// Create a currency tag without validation.
    ///
    /// An oversized tag is silently truncated at a char boundary and an empty
    /// tag is accepted; both produce a value that fails [`MonetaryValue::is_valid`].
    pub fn new_unchecked(tag: &str) -> Self {
        let mut inline = ArrayString::new();
        let mut end = tag.len().min(CURRENCY_MAX_LEN);
        while !tag.is_char_boundary(end) {
            end -= 1;
        }
        // cannot fail: end <= CURRENCY_MAX_LEN and lands on a boundary
        let _ = inline.try_push_str(&tag[..end]);
        Self(inline)
    }

    /// The tag as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exact decimal monetary quantity.
///
/// Stores the scaled coefficient `amount`, the currency tag and the number of
/// implied decimal places; the decimal value is `amount / 10^precision`.
/// Values are immutable: every operator consumes its inputs by value and
/// produces a new value.
///
/// Every operator family comes in two parallel surfaces:
/// - the validating form returns [`MoneyResult`] and checks shape, currency
///   and range invariants before computing;
/// - the `*_unchecked` form skips all checks and uses wrapping arithmetic,
///   trading corrupted output on contract violation for a branch-free hot
///   path. Validate once (e.g. via [`MonetaryValue::is_valid`]), then stay on
///   the fast surface inside loops.
///
/// The derived `PartialEq`/`Eq`/`Hash` use exact triple equality, i.e. the
/// `identical` relation; use [`MonetaryValue::equal`] or
/// [`MonetaryValue::equivalent`] for decimal-value equality across precisions.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let price = MonetaryValue::new(314, "EUR", 2)?; // EUR 3.14
/// let tenth = price.set_precision(1)?;            // EUR 3.1 (half-to-even)
/// assert_eq!(tenth.amount, 31);
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonetaryValue {
    /// The scaled coefficient of the decimal value
    pub amount: i64,
    /// The currency tag; values interoperate iff tags are equal
    pub currency: Currency,
    /// Number of implied decimal places, at most [`MAX_PRECISION`]
    pub precision: u8,
}

impl MonetaryValue {
    /// Build a monetary value, validating every field.
    ///
    /// # Errors
    /// `InvalidCurrency` for an empty or oversized tag, `InvalidPrecision`
    /// for a precision above [`MAX_PRECISION`].
    pub fn new(amount: i64, currency: &str, precision: u8) -> MoneyResult<Self> {
        let currency = Currency::new(currency)?;
        if precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        Ok(Self {
            amount,
            currency,
            precision,
        })
    }

    /// Build a monetary value without validating anything.
    pub fn new_unchecked(amount: i64, currency: &str, precision: u8) -> Self {
        Self {
            amount,
            currency: Currency::new_unchecked(currency),
            precision,
        }
    }

    /// Whether the value satisfies the shape invariant: a non-empty currency
    /// tag and a precision within `[0, MAX_PRECISION]`. The amount itself is
    /// always exact, `i64` has no inexact inhabitants.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.precision <= MAX_PRECISION && !self.currency.is_empty()
    }

    /// Shape validation as a result, used by every validating operator.
    #[inline]
    pub(crate) fn validate(&self) -> MoneyResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(MoneyError::InvalidPrecision);
        }
        if self.currency.is_empty() {
            return Err(MoneyError::InvalidCurrency);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn require_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch);
        }
        Ok(())
    }

    /// Check if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if the amount is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if the amount is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_rejects_empty_and_oversized() {
        assert_eq!(Currency::new(""), Err(MoneyError::InvalidCurrency));
        assert_eq!(
            Currency::new("WAY-TOO-LONG-TAG"),
            Err(MoneyError::InvalidCurrency)
        );
        assert_eq!(Currency::new("EUR").unwrap().as_str(), "EUR");
    }

    #[test]
    fn test_currency_unchecked_truncates() {
        let c = Currency::new_unchecked("ABCDEFGHIJKLMNOP");
        assert_eq!(c.as_str().len(), CURRENCY_MAX_LEN);
        assert!(Currency::new_unchecked("").is_empty());
    }

    #[test]
    fn test_new_validates() {
        assert!(MonetaryValue::new(314, "EUR", 2).is_ok());
        assert_eq!(
            MonetaryValue::new(314, "EUR", 16),
            Err(MoneyError::InvalidPrecision)
        );
        assert_eq!(
            MonetaryValue::new(314, "", 2),
            Err(MoneyError::InvalidCurrency)
        );
    }

    #[test]
    fn test_new_unchecked_skips_validation() {
        let v = MonetaryValue::new_unchecked(314, "", 200);
        assert!(!v.is_valid());
        let w = MonetaryValue::new_unchecked(314, "EUR", 2);
        assert!(w.is_valid());
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(MonetaryValue::new_unchecked(0, "X", 15).is_valid());
        assert!(!MonetaryValue::new_unchecked(0, "X", 16).is_valid());
        assert!(MonetaryValue::new_unchecked(i64::MAX, "X", 0).is_valid());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(MonetaryValue::new_unchecked(0, "EUR", 2).is_zero());
        assert!(MonetaryValue::new_unchecked(1, "EUR", 2).is_positive());
        assert!(MonetaryValue::new_unchecked(-1, "EUR", 2).is_negative());
    }
}
