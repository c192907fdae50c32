// ============================================================================
// Rounding Strategies
// Pure tie-breaking policies over a (whole, numerator, denominator) split
// ============================================================================

use crate::numeric::math::sign;

/// A rounding strategy resolves a possibly-fractional quotient to an integer.
///
/// The quotient is handed over as `whole_part + numerator/denominator`, where
/// the fraction lies strictly between -1 and 1, the numerator carries the
/// sign of the original dividend and the denominator is always positive.
/// Callers may substitute a whole part that preserves only the true whole
/// part's sign and parity, so a strategy must derive nothing but a bounded
/// adjustment from it.
/// Strategies are stateless; any `Fn(i64, i64, i64) -> i64` qualifies, so the
/// ten policies below are plain functions and callers may supply their own.
///
/// Strategies are not meant to be called directly; they are passed to the
/// operators that may round, such as [`MonetaryValue::divide`]. None of them
/// validate their arguments. Operators that round default to
/// [`round_half_to_even`].
///
/// [`MonetaryValue::divide`]: crate::money::MonetaryValue::divide
pub trait RoundingStrategy {
    /// Resolve `whole_part + numerator/denominator` to an integer.
    fn round(&self, whole_part: i64, numerator: i64, denominator: i64) -> i64;
}

impl<F> RoundingStrategy for F
where
    F: Fn(i64, i64, i64) -> i64,
{
    #[inline]
    fn round(&self, whole_part: i64, numerator: i64, denominator: i64) -> i64 {
        self(whole_part, numerator, denominator)
    }
}

/// Rounds to the smallest integer (towards negative infinity).
#[inline]
pub fn round_down(whole_part: i64, numerator: i64, _denominator: i64) -> i64 {
    if numerator == 0 {
        whole_part
    } else {
        whole_part + 0.min(sign(numerator))
    }
}

/// Rounds to the greatest integer (towards positive infinity).
#[inline]
pub fn round_up(whole_part: i64, numerator: i64, _denominator: i64) -> i64 {
    if numerator == 0 {
        whole_part
    } else {
        whole_part + 0.max(sign(numerator))
    }
}

/// Rounds to the integer closest to zero. Truncation.
#[inline]
pub fn round_towards_zero(whole_part: i64, _numerator: i64, _denominator: i64) -> i64 {
    whole_part
}

/// Rounds to the integer farthest from zero.
#[inline]
pub fn round_away_from_zero(whole_part: i64, numerator: i64, _denominator: i64) -> i64 {
    if numerator == 0 {
        whole_part
    } else {
        whole_part + sign(numerator)
    }
}

// The half strategies compare 2·|numerator| against the denominator in i128
// so a denominator near i64::MAX cannot overflow the comparison.

/// Rounds to the closest integer, and up on an exact half.
#[inline]
pub fn round_half_up(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    let double_n = 2 * (numerator as i128).abs();
    let d = denominator as i128;
    if double_n > d {
        return round_away_from_zero(whole_part, numerator, denominator);
    }
    if double_n < d {
        return round_towards_zero(whole_part, numerator, denominator);
    }
    round_up(whole_part, numerator, denominator)
}

/// Rounds to the closest integer, and down on an exact half.
#[inline]
pub fn round_half_down(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    let double_n = 2 * (numerator as i128).abs();
    let d = denominator as i128;
    if double_n > d {
        return round_away_from_zero(whole_part, numerator, denominator);
    }
    if double_n < d {
        return round_towards_zero(whole_part, numerator, denominator);
    }
    round_down(whole_part, numerator, denominator)
}

/// Rounds to the closest integer, and towards zero on an exact half.
#[inline]
pub fn round_half_towards_zero(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    if 2 * (numerator as i128).abs() > denominator as i128 {
        return round_away_from_zero(whole_part, numerator, denominator);
    }
    round_towards_zero(whole_part, numerator, denominator)
}

/// Rounds to the closest integer, and away from zero on an exact half.
#[inline]
pub fn round_half_away_from_zero(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    if 2 * (numerator as i128).abs() >= denominator as i128 {
        return round_away_from_zero(whole_part, numerator, denominator);
    }
    round_towards_zero(whole_part, numerator, denominator)
}

/// Rounds to the closest integer, and to the closest even integer on an
/// exact half. Banker's rounding; the unbiased default for money.
#[inline]
pub fn round_half_to_even(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    if 2 * (numerator as i128).abs() == denominator as i128 {
        if whole_part % 2 == 0 {
            return whole_part;
        }
        return whole_part + sign(numerator);
    }
    round_half_up(whole_part, numerator, denominator)
}

/// Rounds to the closest integer, and to the closest odd integer on an
/// exact half. Unbiased, like half-to-even.
#[inline]
pub fn round_half_to_odd(whole_part: i64, numerator: i64, denominator: i64) -> i64 {
    if 2 * (numerator as i128).abs() == denominator as i128 {
        if whole_part % 2 == 0 {
            return whole_part + sign(numerator);
        }
        return whole_part;
    }
    round_half_up(whole_part, numerator, denominator)
}
