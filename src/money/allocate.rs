// ============================================================================
// Allocation
// Exact-sum weighted distribution of an amount
// ============================================================================

use super::MonetaryValue;
use crate::numeric::math::{allocate_integer, allocate_integer_unchecked, checked_sum};
use crate::numeric::{MoneyError, MoneyResult};

impl MonetaryValue {
    /// Split the value into one share per weight, proportionally, with the
    /// shares summing to exactly the original amount. Currency and precision
    /// are preserved.
    ///
    /// Rounding crumbs travel forward through the shares (Bresenham
    /// accumulation), so the split is order-sensitive: reordering weights
    /// changes which shares absorb the remainder, never the total. Negative
    /// weights are permitted as long as the weight total stays strictly
    /// positive.
    ///
    /// # Errors
    /// Invalid shape, a weight total that is zero, negative or overflows, or
    /// a share outside i64.
    pub fn allocate(self, weights: &[i64]) -> MoneyResult<Vec<Self>> {
        self.validate()?;
        let total = checked_sum(weights).ok_or(MoneyError::Overflow)?;
        if total <= 0 {
            return Err(MoneyError::NonPositiveWeightSum);
        }
        let shares = allocate_integer(self.amount, weights, total)?;
        tracing::trace!(
            amount = self.amount,
            shares = shares.len(),
            "allocated monetary value"
        );
        Ok(shares
            .into_iter()
            .map(|amount| Self { amount, ..self })
            .collect())
    }

    /// Fast form: no validation, wrapping weight total, truncating shares.
    /// Panics if the weights are non-empty and their total is zero; empty
    /// weights yield an empty vector.
    pub fn allocate_unchecked(self, weights: &[i64]) -> Vec<Self> {
        let total = weights.iter().copied().fold(0i64, i64::wrapping_add);
        allocate_integer_unchecked(self.amount, weights, total)
            .into_iter()
            .map(|amount| Self { amount, ..self })
            .collect()
    }
}
