use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] validator::ValidationError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] simulator::SimulationError),

    #[error("Cost basis error: {0}")]
    CostBasis(#[from] cost_basis::CostBasisError),
}

impl EngineError {
    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&validator::ValidationError> {
        match self {
            EngineError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
