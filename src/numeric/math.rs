// ============================================================================
// Numeric Primitives
// Integer helpers shared by every operator: powers of ten, sign, rounded
// division and the exact weighted-share allocator
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::rounding::RoundingStrategy;
use smallvec::SmallVec;

/// Maximum supported precision (decimal places).
///
/// 10^15 keeps every scale factor comfortably inside the i64 range and
/// matches the widest precision a double-precision float can carry exactly,
/// which keeps float coercions honest.
pub const MAX_PRECISION: u8 = 15;

/// Compute 10^n.
///
/// Wrapping on purpose: the fast (unchecked) surfaces may feed an
/// out-of-range precision here and get garbage back instead of a panic.
pub(crate) const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result = result.wrapping_mul(10);
        i += 1;
    }
    result
}

/// Sign of an integer; zero counts as positive.
#[inline]
pub(crate) const fn sign(n: i64) -> i64 {
    if n < 0 {
        -1
    } else {
        1
    }
}

/// Overflow-checked sum of a slice.
#[inline]
pub(crate) fn checked_sum(ns: &[i64]) -> Option<i64> {
    ns.iter().try_fold(0i64, |acc, &n| acc.checked_add(n))
}

/// Narrow an i128 intermediate back to an amount, splitting the failure
/// direction into overflow and underflow.
#[inline]
pub(crate) fn try_narrow(value: i128) -> MoneyResult<i64> {
    if value > i64::MAX as i128 {
        Err(MoneyError::Overflow)
    } else if value < i64::MIN as i128 {
        Err(MoneyError::Underflow)
    } else {
        Ok(value as i64)
    }
}

/// Divide with an explicit rounding strategy.
///
/// Uses truncated division so that `whole + numerator/denominator` is always
/// the exact quotient and the numerator carries the sign of the dividend.
/// A negative divider is normalized by flipping both fraction signs, so the
/// strategy always sees a positive denominator.
pub(crate) fn checked_div_round<R: RoundingStrategy>(
    amount: i128,
    divider: i64,
    rounding: &R,
) -> MoneyResult<i64> {
    if divider == 0 {
        return Err(MoneyError::DivisionByZero);
    }
    // i64::MIN has no positive counterpart that fits the strategy's
    // denominator domain.
    if divider == i64::MIN {
        return Err(MoneyError::Overflow);
    }
    let d = divider as i128;
    let whole = amount / d;
    let mut numerator = (amount % d) as i64;
    let mut denominator = divider;
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }
    // Strategies only inspect the sign and parity of the whole part, so hand
    // them a small stand-in and apply the adjustment to the wide quotient;
    // the whole part itself may sit exactly on the i64 boundary, where the
    // one-step adjustment would otherwise wrap.
    let proxy = (whole % 2) as i64;
    let delta = rounding.round(proxy, numerator, denominator) as i128 - proxy as i128;
    try_narrow(whole + delta)
}

/// Split `amount` into integer shares proportional to `weights`, summing to
/// exactly `amount`.
///
/// One-dimensional Bresenham: shares are floored, and the lost fraction is
/// carried forward as an integer remainder over `total` (the crumb), so no
/// float error ever accumulates. The final share takes whatever is left,
/// which guarantees conservation. `total` must be strictly positive.
pub(crate) fn allocate_integer(
    amount: i64,
    weights: &[i64],
    total: i64,
) -> MoneyResult<SmallVec<[i64; 8]>> {
    let mut shares: SmallVec<[i64; 8]> = SmallVec::with_capacity(weights.len());
    if weights.is_empty() {
        return Ok(shares);
    }
    let total = total as i128;
    let amount_wide = amount as i128;
    let mut crumbs: i128 = 0;
    let mut allocated: i128 = 0;
    for &weight in &weights[..weights.len() - 1] {
        let scaled = (weight as i128) * amount_wide + crumbs;
        let share = scaled.div_euclid(total);
        crumbs = scaled.rem_euclid(total);
        allocated += share;
        shares.push(try_narrow(share)?);
    }
    shares.push(try_narrow(amount_wide - allocated)?);
    Ok(shares)
}

/// Fast-path counterpart of [`allocate_integer`]: no range checks, shares are
/// truncated into i64. Panics on a zero `total`.
pub(crate) fn allocate_integer_unchecked(
    amount: i64,
    weights: &[i64],
    total: i64,
) -> SmallVec<[i64; 8]> {
    let mut shares: SmallVec<[i64; 8]> = SmallVec::with_capacity(weights.len());
    if weights.is_empty() {
        return shares;
    }
    let total = total as i128;
    let amount_wide = amount as i128;
    let mut crumbs: i128 = 0;
    let mut allocated: i128 = 0;
    for &weight in &weights[..weights.len() - 1] {
        let scaled = (weight as i128) * amount_wide + crumbs;
        let share = scaled.div_euclid(total);
        crumbs = scaled.rem_euclid(total);
        allocated += share;
        shares.push(share as i64);
    }
    shares.push((amount_wide - allocated) as i64);
    shares
}
