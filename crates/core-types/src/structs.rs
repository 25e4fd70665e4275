use crate::enums::CompoundingFrequency;
use crate::field::RawField;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==============================================================================
// Percent figures
// ==============================================================================

/// A percentage return, or the marker for a gain measured against nothing.
///
/// `Unbounded` is kept apart from any numeric value so it can be rendered as
/// "∞%" without an infinity ever entering further arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnPercent {
    Finite(Decimal),
    Unbounded,
}

impl ReturnPercent {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, ReturnPercent::Unbounded)
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            ReturnPercent::Finite(v) => Some(*v),
            ReturnPercent::Unbounded => None,
        }
    }
}

impl Default for ReturnPercent {
    fn default() -> Self {
        ReturnPercent::Finite(Decimal::ZERO)
    }
}

// ==============================================================================
// Compounding
// ==============================================================================

/// A compounding simulation request as received from a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundingRequest {
    pub principal: RawField,
    pub annual_rate_percent: RawField,
    pub years: RawField,
    pub frequency: CompoundingFrequency,
    /// Optional; absence means no recurring contribution.
    pub contribution_per_period: RawField,
}

/// Validated inputs for a compounding simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingInput {
    pub principal: Decimal,
    /// e.g. 5 for 5% per year. May be zero or negative.
    pub annual_rate_percent: Decimal,
    pub years: Decimal,
    pub frequency: CompoundingFrequency,
    pub contribution_per_period: Decimal,
}

impl CompoundingInput {
    /// Number of whole compounding periods covered by `years`.
    ///
    /// A fractional period count is truncated toward zero: 1.5 years compounded
    /// annually is a single period. Returns `None` if the count does not fit in `u64`.
    pub fn total_periods(&self) -> Option<u64> {
        use rust_decimal::prelude::ToPrimitive;
        let periods = self
            .years
            .checked_mul(Decimal::from(self.frequency.periods_per_year()))?;
        if periods.is_sign_negative() {
            return Some(0);
        }
        periods.trunc().to_u64()
    }
}

/// One row of the compounding ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based.
    pub period_index: u64,
    pub starting_balance: Decimal,
    pub interest_earned: Decimal,
    pub contribution: Decimal,
    pub ending_balance: Decimal,
    /// Return of `ending_balance` measured against the original principal.
    pub cumulative_return: ReturnPercent,
}

/// The full outcome of a compounding simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingResult {
    pub final_balance: Decimal,
    pub overall_return: ReturnPercent,
    pub total_contributed: Decimal,
    pub total_interest: Decimal,
    pub ledger: Vec<PeriodRecord>,
}

// ==============================================================================
// Average cost
// ==============================================================================

/// A single buy as received from a caller, before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub amount: RawField,
    pub unit_price: RawField,
}

impl PurchaseRequest {
    pub fn new(amount: impl Into<RawField>, unit_price: impl Into<RawField>) -> Self {
        Self {
            amount: amount.into(),
            unit_price: unit_price.into(),
        }
    }
}

/// A validated buy: money spent and the price paid per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseEntry {
    pub amount: Decimal,
    pub unit_price: Decimal,
}

impl PurchaseEntry {
    pub fn new(amount: Decimal, unit_price: Decimal) -> Self {
        Self { amount, unit_price }
    }
}

/// How a single entry fed into the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// 0-based position of the entry in the submitted list.
    pub index: usize,
    pub amount: Decimal,
    pub unit_price: Decimal,
    /// Units acquired; zero for entries that were skipped.
    pub quantity: Decimal,
    pub included: bool,
}

/// Weighted average unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AveragePrice {
    Value(Decimal),
    /// Capital was invested but no units were acquired.
    Unbounded,
}

impl AveragePrice {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            AveragePrice::Value(v) => Some(*v),
            AveragePrice::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageCostResult {
    pub total_investment: Decimal,
    pub total_quantity: Decimal,
    pub average_price: AveragePrice,
    pub lines: Vec<PurchaseLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(years: Decimal, frequency: CompoundingFrequency) -> CompoundingInput {
        CompoundingInput {
            principal: dec!(1000),
            annual_rate_percent: dec!(5),
            years,
            frequency,
            contribution_per_period: Decimal::ZERO,
        }
    }

    #[test]
    fn total_periods_truncates_fractional_counts() {
        assert_eq!(input(dec!(1.5), CompoundingFrequency::Annual).total_periods(), Some(1));
        assert_eq!(input(dec!(0.5), CompoundingFrequency::Annual).total_periods(), Some(0));
        assert_eq!(input(dec!(1.5), CompoundingFrequency::Monthly).total_periods(), Some(18));
        assert_eq!(input(dec!(2), CompoundingFrequency::Daily).total_periods(), Some(730));
    }

    #[test]
    fn return_percent_serializes_sentinel_distinctly() {
        let unbounded = serde_json::to_string(&ReturnPercent::Unbounded).unwrap();
        let finite = serde_json::to_string(&ReturnPercent::Finite(dec!(5))).unwrap();
        assert_eq!(unbounded, "\"Unbounded\"");
        assert_ne!(unbounded, finite);
    }

    #[test]
    fn accessors_hide_sentinels() {
        assert_eq!(ReturnPercent::Unbounded.value(), None);
        assert!(ReturnPercent::Unbounded.is_unbounded());
        assert_eq!(ReturnPercent::default().value(), Some(Decimal::ZERO));
        assert_eq!(AveragePrice::Value(dec!(2)).value(), Some(dec!(2)));
        assert_eq!(AveragePrice::Unbounded.value(), None);
    }
}
