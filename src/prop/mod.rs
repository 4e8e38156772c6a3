//! Property value helpers.
//!
//! [`unit`] covers dimension arithmetic and unit constructors, [`shorthand`]
//! covers the four-slot shorthands (margins, paddings, border radii) and
//! two-part values.

pub mod shorthand;
pub mod unit;
