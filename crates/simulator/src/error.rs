use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Balance exceeded the representable decimal range in period {period}")]
    Overflow { period: u64 },

    #[error("The number of compounding periods does not fit in memory")]
    TooManyPeriods,
}
