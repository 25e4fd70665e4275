//! # Accrue Cost Basis
//!
//! Volume-weighted average purchase price over a series of buys.
//!
//! ## Public API
//!
//! - `AverageCostAggregator`: The stateless aggregator.
//! - `CostBasisError`: Arithmetic failures that survive validation.

pub mod aggregator;
pub mod error;

pub use aggregator::AverageCostAggregator;
pub use error::CostBasisError;
