//! # Accrue Calculation Engine
//!
//! The public entry point for both calculators. Every call validates the whole
//! request first and only runs the computation when every field is usable.
//!
//! ## Architectural Principles
//!
//! - **No ambient state:** A `Calculator` holds nothing but immutable limits, so a single
//!   instance can serve any number of concurrent callers.
//! - **Structured failures:** Invalid input comes back as `EngineError::Validation` naming
//!   every failing field, never as a panic.

use configuration::Limits;
use core_types::{
    AverageCostResult, CompoundingRequest, CompoundingResult, PurchaseRequest,
};
use cost_basis::AverageCostAggregator;
use simulator::CompoundingSimulator;
use validator::InputValidator;

pub mod error;

pub use error::EngineError;
pub use validator::{FieldFault, ValidationError};

/// Validates requests and dispatches them to the matching calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    validator: InputValidator,
    simulator: CompoundingSimulator,
    aggregator: AverageCostAggregator,
}

impl Calculator {
    /// Creates a calculator that enforces the configured limits.
    pub fn new(limits: &Limits) -> Self {
        Self {
            validator: InputValidator::new(limits.max_total_periods),
            ..Self::default()
        }
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    /// Simulates compound growth with an optional fixed contribution per period.
    pub fn simulate_compounding(
        &self,
        request: &CompoundingRequest,
    ) -> Result<CompoundingResult, EngineError> {
        let input = self.validator.validate_compounding(request)?;
        let result = self.simulator.simulate(&input)?;

        tracing::info!(
            periods = result.ledger.len(),
            frequency = %input.frequency,
            final_balance = %result.final_balance,
            "Compounding simulation complete."
        );
        Ok(result)
    }

    /// Computes the volume-weighted average purchase price of a series of buys.
    pub fn compute_average_cost(
        &self,
        requests: &[PurchaseRequest],
    ) -> Result<AverageCostResult, EngineError> {
        let entries = self.validator.validate_purchases(requests)?;
        let result = self.aggregator.aggregate(&entries)?;

        tracing::info!(
            entries = entries.len(),
            total_investment = %result.total_investment,
            "Average cost computed."
        );
        Ok(result)
    }
}

/// `Calculator::simulate_compounding` with default limits.
pub fn simulate_compounding(request: &CompoundingRequest) -> Result<CompoundingResult, EngineError> {
    Calculator::default().simulate_compounding(request)
}

/// `Calculator::compute_average_cost` with default limits.
pub fn compute_average_cost(requests: &[PurchaseRequest]) -> Result<AverageCostResult, EngineError> {
    Calculator::default().compute_average_cost(requests)
}
