//! # Accrue Return Metrics
//!
//! Percentage figures shared by the compounding simulator and any caller that
//! wants to express a balance relative to what was originally put in.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Total Functions:** Every input produces a figure. A zero baseline yields either
//!   zero or the `Unbounded` marker, never a division by zero.
//!
//! ## Public API
//!
//! - `percent_return`: Return of a current value against a baseline, in percent.
//! - `gain`: The absolute difference behind that percentage.

pub mod returns;

pub use returns::{gain, percent_return};
