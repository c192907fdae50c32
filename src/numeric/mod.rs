// ============================================================================
// Numeric Module
// Shared integer primitives and error types for exact monetary arithmetic
// ============================================================================
//
// This module provides:
// - MoneyError / MoneyResult: error types for every operator
// - MAX_PRECISION: the crate-wide precision bound
// - Internal helpers: powers of ten, sign, rounded division, exact allocation
//
// Design principles:
// - No floating-point operations anywhere in the arithmetic core
// - Checked paths return Result; fast paths wrap by documented design
// - i128 intermediates wherever a product or alignment could leave i64

mod errors;
pub(crate) mod math;

pub use errors::{MoneyError, MoneyResult};
pub use math::MAX_PRECISION;
