use crate::error::CostBasisError;
use core_types::{AverageCostResult, AveragePrice, PurchaseEntry, PurchaseLine};
use rust_decimal::Decimal;

/// Folds a series of buys into total capital, total units and the
/// volume-weighted average unit price.
#[derive(Debug, Default, Clone, Copy)]
pub struct AverageCostAggregator {}

impl AverageCostAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates `entries` in order.
    ///
    /// Only entries with a positive amount and a positive unit price contribute.
    /// Skipped entries still appear in the returned lines, with zero quantity.
    pub fn aggregate(&self, entries: &[PurchaseEntry]) -> Result<AverageCostResult, CostBasisError> {
        let mut total_investment = Decimal::ZERO;
        let mut total_quantity = Decimal::ZERO;
        let mut lines = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let overflow = || CostBasisError::Overflow { index };

            // Investment and quantity are only ever accumulated together, so a
            // positive total investment always comes with a positive quantity.
            let included = entry.amount > Decimal::ZERO && entry.unit_price > Decimal::ZERO;
            let quantity = if included {
                let quantity = entry.amount.checked_div(entry.unit_price).ok_or_else(overflow)?;
                total_investment = total_investment.checked_add(entry.amount).ok_or_else(overflow)?;
                total_quantity = total_quantity.checked_add(quantity).ok_or_else(overflow)?;
                quantity
            } else {
                tracing::debug!(index, amount = %entry.amount, unit_price = %entry.unit_price, "Skipping non-contributing purchase.");
                Decimal::ZERO
            };

            lines.push(PurchaseLine {
                index,
                amount: entry.amount,
                unit_price: entry.unit_price,
                quantity,
                included,
            });
        }

        let average_price = if total_quantity > Decimal::ZERO {
            let average = total_investment
                .checked_div(total_quantity)
                .ok_or(CostBasisError::AverageOverflow {
                    total_investment,
                    total_quantity,
                })?;
            AveragePrice::Value(average)
        } else if total_investment > Decimal::ZERO {
            AveragePrice::Unbounded
        } else {
            AveragePrice::Value(Decimal::ZERO)
        };

        tracing::debug!(
            entries = entries.len(),
            %total_investment,
            %total_quantity,
            ?average_price,
            "Average cost aggregated."
        );

        Ok(AverageCostResult {
            total_investment,
            total_quantity,
            average_price,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn aggregate(entries: &[PurchaseEntry]) -> AverageCostResult {
        AverageCostAggregator::new().aggregate(entries).unwrap()
    }

    #[test]
    fn two_buys_at_different_prices() {
        let result = aggregate(&[
            PurchaseEntry::new(dec!(1_000_000), dec!(50_000)),
            PurchaseEntry::new(dec!(500_000), dec!(40_000)),
        ]);

        assert_eq!(result.total_investment, dec!(1_500_000));
        assert_eq!(result.total_quantity, dec!(32.5));
        let average = result.average_price.value().unwrap();
        assert_eq!(average.round_dp(2), dec!(46_153.85));
        assert_eq!(result.lines[0].quantity, dec!(20));
        assert_eq!(result.lines[1].quantity, dec!(12.5));
    }

    #[test]
    fn zero_amount_contributes_nothing() {
        let result = aggregate(&[PurchaseEntry::new(dec!(0), dec!(0))]);

        assert_eq!(result.total_investment, Decimal::ZERO);
        assert_eq!(result.total_quantity, Decimal::ZERO);
        assert_eq!(result.average_price, AveragePrice::Value(Decimal::ZERO));
        assert_eq!(result.lines.len(), 1);
        assert!(!result.lines[0].included);
    }

    #[test]
    fn skipped_entries_stay_in_the_listing() {
        let result = aggregate(&[
            PurchaseEntry::new(dec!(100), dec!(10)),
            PurchaseEntry::new(dec!(-50), dec!(10)),
            PurchaseEntry::new(dec!(300), dec!(0)),
            PurchaseEntry::new(dec!(200), dec!(20)),
        ]);

        assert_eq!(result.lines.len(), 4);
        let included: Vec<bool> = result.lines.iter().map(|l| l.included).collect();
        assert_eq!(included, vec![true, false, false, true]);
        assert_eq!(result.total_investment, dec!(300));
        assert_eq!(result.total_quantity, dec!(20));
        assert_eq!(result.average_price, AveragePrice::Value(dec!(15)));
    }

    #[test]
    fn single_entry_average_is_its_price() {
        let result = aggregate(&[PurchaseEntry::new(dec!(1234.5), dec!(12.345))]);
        assert_eq!(result.average_price.value().unwrap(), dec!(12.345));
    }

    #[test]
    fn empty_input_is_all_zero() {
        let result = aggregate(&[]);
        assert_eq!(result.total_investment, Decimal::ZERO);
        assert_eq!(result.average_price, AveragePrice::Value(Decimal::ZERO));
        assert!(result.lines.is_empty());
    }

    #[test]
    fn quantity_overflow_is_reported() {
        let err = AverageCostAggregator::new()
            .aggregate(&[
                PurchaseEntry::new(dec!(1), dec!(1)),
                PurchaseEntry::new(Decimal::MAX, dec!(0.0001)),
            ])
            .unwrap_err();
        assert_eq!(err, CostBasisError::Overflow { index: 1 });
    }

    #[test]
    fn dust_quantity_average_overflow_is_reported() {
        // 10 / 7e28 rounds to the smallest representable quantity, and dividing
        // back out lands beyond Decimal::MAX.
        let price = dec!(70_000_000_000_000_000_000_000_000_000);
        let err = AverageCostAggregator::new()
            .aggregate(&[PurchaseEntry::new(dec!(10), price)])
            .unwrap_err();
        assert!(matches!(err, CostBasisError::AverageOverflow { .. }));
    }
}
