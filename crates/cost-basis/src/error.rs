use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostBasisError {
    #[error("Purchase {index} pushed a total beyond the representable decimal range")]
    Overflow { index: usize },
    #[error("Average price of {total_investment} over {total_quantity} units is beyond the representable decimal range")]
    AverageOverflow {
        total_investment: Decimal,
        total_quantity: Decimal,
    },
}
