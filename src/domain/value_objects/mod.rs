//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceId`], [`AttributeId`]: String-based catalog identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: Non-negative decimal amount
//! - [`Quantity`]: Positive whole order quantity
//! - [`RequestedQuantity`]: Quantity as sent by the caller
//! - [`PriceImpact`]: Signed impact applied to a running unit price
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`round_currency`]: Half-up rounding to two decimals
//!
//! ## Domain Enums
//!
//! - `AttributeKind`: select, boolean, number or text
//! - `ImpactKind`: fixed, percentage, multiplier or per-unit
//! - `QuantityPolicy`: tolerant or strict quantity handling

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod impact;
pub mod price;
pub mod quantity;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_currency};
pub use enums::{AttributeKind, ImpactKind, ParseEnumError, QuantityPolicy};
pub use ids::{AttributeId, ServiceId};
pub use impact::PriceImpact;
pub use price::Price;
pub use quantity::{Quantity, RequestedQuantity};
