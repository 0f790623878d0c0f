//! # Checked Arithmetic
//!
//! Traits and utilities for safe decimal arithmetic in price computations.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`round_currency`] - Half-up rounding to two decimal places
//! - [`percentage_factor`] - Converts a percentage into a multiplicative factor
//!
//! # Examples
//!
//! ```
//! use hauze_quote::domain::value_objects::arithmetic::{CheckedArithmetic, round_currency};
//! use rust_decimal::Decimal;
//!
//! let a = Decimal::new(100, 0);
//! let b = Decimal::new(3, 0);
//! let third = a.safe_div(b).unwrap();
//! assert_eq!(round_currency(third), Decimal::new(3333, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places used for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic,
/// including overflow, division by zero and invalid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., negative when non-negative required).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a currency amount to [`CURRENCY_SCALE`] decimal places.
///
/// Midpoints round away from zero, which is the conventional half-up
/// rounding for the non-negative amounts produced by the pricing engine.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::arithmetic::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(10005, 3)), Decimal::new(1001, 2));
/// assert_eq!(round_currency(Decimal::new(10004, 3)), Decimal::new(1000, 2));
/// ```
#[inline]
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Converts a percentage into the factor `1 + pct / 100`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the intermediate values overflow.
///
/// # Examples
///
/// ```
/// use hauze_quote::domain::value_objects::arithmetic::percentage_factor;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage_factor(Decimal::new(10, 0)).unwrap(), Decimal::new(110, 2));
/// assert_eq!(percentage_factor(Decimal::new(-150, 0)).unwrap(), Decimal::new(-50, 2));
/// ```
pub fn percentage_factor(pct: Decimal) -> ArithmeticResult<Decimal> {
    pct.safe_div(Decimal::ONE_HUNDRED)?.safe_add(Decimal::ONE)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}
