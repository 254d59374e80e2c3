//! Supporting utilities used by fin models.
//!
//! - [`constraint`]: Numeric invariants enforced at construction time.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod units;
