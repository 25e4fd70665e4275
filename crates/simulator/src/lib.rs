//! # Accrue Compounding Simulator
//!
//! Steps a balance through every compounding period, recording a ledger row per
//! period. The plain calculator is the contribution-bearing one with a zero
//! contribution, so there is a single code path for both.
//!
//! ## Public API
//!
//! - `CompoundingSimulator`: The stateless simulator.
//! - `SimulationError`: Arithmetic failures that survive validation.

pub mod compounding;
pub mod error;

pub use compounding::CompoundingSimulator;
pub use error::SimulationError;
