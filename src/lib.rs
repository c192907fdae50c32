// ============================================================================
// Exact-Money Library
// Exact decimal monetary arithmetic on scaled integers
// ============================================================================

//! # Exact-Money
//!
//! Exact decimal monetary arithmetic: scaled `i64` coefficients, explicit
//! precision, pluggable rounding and exact-sum allocation. No floating-point
//! drift anywhere in the core.
//!
//! ## Features
//!
//! - **Scaled-integer values**: a value is `(amount, currency, precision)`
//!   with the decimal value `amount / 10^precision`
//! - **Ten rounding strategies** plus support for caller-defined policies;
//!   half-to-even (banker's rounding) everywhere by default
//! - **Dual surfaces**: every operator has a validating form returning
//!   `MoneyResult` and a wrapping `*_unchecked` form for hot loops
//! - **Exact allocation**: weighted splits that conserve the total to the
//!   cent, via Bresenham-style crumb accumulation
//! - **Purely functional**: values are `Copy` and immutable; every operator
//!   returns a new value, so concurrent use needs no coordination
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let price = MonetaryValue::new(2499, "EUR", 2)?;      // EUR 24.99
//! let tripled = price.multiply(3, 0)?;                  // EUR 74.97
//! let shares = tripled.allocate(&[1, 1, 1])?;           // split three ways
//!
//! assert_eq!(shares[0].amount + shares[1].amount + shares[2].amount, 7497);
//! assert_eq!(shares[2].to_string(), "EUR 24.99");
//!
//! // Narrowing is the only lossy operation, and the caller picks the policy
//! let rounded = price.set_precision_with(1, round_away_from_zero)?;
//! assert_eq!(rounded.to_string(), "EUR 25.0");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod money;
pub mod numeric;
pub mod rounding;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{Currency, MonetaryValue, CURRENCY_MAX_LEN};
    pub use crate::numeric::{MoneyError, MoneyResult, MAX_PRECISION};
    pub use crate::rounding::{
        round_away_from_zero, round_down, round_half_away_from_zero, round_half_down,
        round_half_to_even, round_half_to_odd, round_half_towards_zero, round_half_up,
        round_towards_zero, round_up, RoundingStrategy,
    };
}
