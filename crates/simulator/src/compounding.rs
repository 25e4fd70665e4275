use crate::error::SimulationError;
use analytics::percent_return;
use core_types::{CompoundingInput, CompoundingResult, PeriodRecord};
use rust_decimal::Decimal;

/// Ledger rows reserved up front; longer simulations grow the ledger as they go.
const LEDGER_PREALLOCATION: usize = 4096;

/// A stateless, period-by-period compound growth simulator.
///
/// Each period earns `starting_balance * annual_rate / 100 / periods_per_year`
/// and then receives the fixed contribution, if one is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompoundingSimulator {}

impl CompoundingSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the simulation over every whole period covered by `input.years`.
    ///
    /// # Arguments
    ///
    /// * `input` - Validated inputs. A non-positive contribution is treated as no
    ///   contribution rather than a withdrawal.
    ///
    /// # Returns
    ///
    /// The full ledger and final totals. Returns are measured against the original
    /// principal only; contributions do not enter the denominator.
    pub fn simulate(&self, input: &CompoundingInput) -> Result<CompoundingResult, SimulationError> {
        let total_periods = input.total_periods().ok_or(SimulationError::TooManyPeriods)?;
        let capacity = usize::try_from(total_periods).map_err(|_| SimulationError::TooManyPeriods)?;

        let periods_per_year = Decimal::from(input.frequency.periods_per_year());
        let rate_per_period = input.annual_rate_percent / Decimal::ONE_HUNDRED / periods_per_year;
        let contribution = if input.contribution_per_period > Decimal::ZERO {
            input.contribution_per_period
        } else {
            Decimal::ZERO
        };

        tracing::debug!(
            total_periods,
            %rate_per_period,
            %contribution,
            frequency = %input.frequency,
            "Starting compounding simulation."
        );

        let mut ledger = Vec::with_capacity(capacity.min(LEDGER_PREALLOCATION));
        let mut balance = input.principal;
        let mut total_contributed = Decimal::ZERO;
        let mut total_interest = Decimal::ZERO;

        for period_index in 1..=total_periods {
            let overflow = || SimulationError::Overflow { period: period_index };

            let starting_balance = balance;
            let interest_earned = starting_balance.checked_mul(rate_per_period).ok_or_else(overflow)?;
            let ending_balance = starting_balance
                .checked_add(interest_earned)
                .and_then(|b| b.checked_add(contribution))
                .ok_or_else(overflow)?;

            total_interest = total_interest.checked_add(interest_earned).ok_or_else(overflow)?;
            total_contributed = total_contributed.checked_add(contribution).ok_or_else(overflow)?;

            ledger.push(PeriodRecord {
                period_index,
                starting_balance,
                interest_earned,
                contribution,
                ending_balance,
                cumulative_return: percent_return(ending_balance, input.principal),
            });

            balance = ending_balance;
        }

        let overall_return = percent_return(balance, input.principal);
        tracing::debug!(final_balance = %balance, ?overall_return, "Compounding simulation finished.");

        Ok(CompoundingResult {
            final_balance: balance,
            overall_return,
            total_contributed,
            total_interest,
            ledger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CompoundingFrequency, ReturnPercent};
    use rust_decimal_macros::dec;

    fn input(
        principal: Decimal,
        rate: Decimal,
        years: Decimal,
        frequency: CompoundingFrequency,
        contribution: Decimal,
    ) -> CompoundingInput {
        CompoundingInput {
            principal,
            annual_rate_percent: rate,
            years,
            frequency,
            contribution_per_period: contribution,
        }
    }

    fn run(input: &CompoundingInput) -> CompoundingResult {
        CompoundingSimulator::new().simulate(input).unwrap()
    }

    #[test]
    fn one_annual_period_without_contribution() {
        let result = run(&input(dec!(1_000_000), dec!(5), dec!(1), CompoundingFrequency::Annual, dec!(0)));

        assert_eq!(result.ledger.len(), 1);
        assert_eq!(result.final_balance, dec!(1_050_000));
        assert_eq!(result.overall_return, ReturnPercent::Finite(dec!(5)));
        assert_eq!(result.total_interest, dec!(50_000));
        assert_eq!(result.total_contributed, dec!(0));
    }

    #[test]
    fn monthly_compounding_for_a_year() {
        let result = run(&input(dec!(1_000_000), dec!(12), dec!(1), CompoundingFrequency::Monthly, dec!(0)));

        assert_eq!(result.ledger.len(), 12);
        assert_eq!(result.ledger[0].interest_earned, dec!(10_000));
        assert_eq!(result.final_balance.round_dp(2), dec!(1_126_825.03));
        let overall = result.overall_return.value().unwrap();
        assert_eq!(overall.round_dp(4), dec!(12.6825));
    }

    #[test]
    fn ledger_chains_balances_and_matches_final() {
        let result = run(&input(dec!(5_000), dec!(7.5), dec!(3), CompoundingFrequency::Quarterly, dec!(250)));

        assert_eq!(result.ledger.len(), 12);
        assert_eq!(result.ledger[0].starting_balance, dec!(5_000));
        for pair in result.ledger.windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
            assert_eq!(pair[1].period_index, pair[0].period_index + 1);
        }
        for record in &result.ledger {
            assert_eq!(
                record.ending_balance,
                record.starting_balance + record.interest_earned + record.contribution
            );
        }
        assert_eq!(result.ledger.last().unwrap().ending_balance, result.final_balance);
        assert_eq!(result.total_contributed, dec!(3_000));
    }

    #[test]
    fn zero_rate_only_adds_contributions() {
        let result = run(&input(dec!(1_000), dec!(0), dec!(2), CompoundingFrequency::Monthly, dec!(100)));

        for record in &result.ledger {
            assert_eq!(record.interest_earned, Decimal::ZERO);
            assert_eq!(record.ending_balance, record.starting_balance + dec!(100));
        }
        assert_eq!(result.final_balance, dec!(3_400));
        // Contributions count as gain against the principal.
        assert_eq!(result.overall_return, ReturnPercent::Finite(dec!(240)));
    }

    #[test]
    fn fractional_periods_are_truncated() {
        let result = run(&input(dec!(1_000), dec!(10), dec!(1.5), CompoundingFrequency::Annual, dec!(0)));
        assert_eq!(result.ledger.len(), 1);
        assert_eq!(result.final_balance, dec!(1_100));
    }

    #[test]
    fn no_whole_period_leaves_principal_untouched() {
        let result = run(&input(dec!(1_000), dec!(10), dec!(0.5), CompoundingFrequency::Annual, dec!(50)));
        assert!(result.ledger.is_empty());
        assert_eq!(result.final_balance, dec!(1_000));
        assert_eq!(result.overall_return, ReturnPercent::Finite(dec!(0)));
    }

    #[test]
    fn negative_contribution_is_ignored() {
        let with_negative = run(&input(dec!(1_000), dec!(6), dec!(1), CompoundingFrequency::Monthly, dec!(-50)));
        let without = run(&input(dec!(1_000), dec!(6), dec!(1), CompoundingFrequency::Monthly, dec!(0)));

        assert_eq!(with_negative, without);
        assert!(with_negative.ledger.iter().all(|r| r.contribution == Decimal::ZERO));
    }

    #[test]
    fn zero_principal_with_contributions_is_unbounded() {
        let result = run(&input(dec!(0), dec!(5), dec!(1), CompoundingFrequency::Quarterly, dec!(100)));

        assert!(result.ledger.iter().all(|r| r.cumulative_return.is_unbounded()));
        assert!(result.overall_return.is_unbounded());
        assert_eq!(result.ledger[0].interest_earned, Decimal::ZERO);
    }

    #[test]
    fn zero_principal_without_contributions_stays_at_zero() {
        let result = run(&input(dec!(0), dec!(5), dec!(2), CompoundingFrequency::Annual, dec!(0)));
        assert_eq!(result.final_balance, Decimal::ZERO);
        assert_eq!(result.overall_return, ReturnPercent::Finite(Decimal::ZERO));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = input(dec!(12_345.67), dec!(3.3), dec!(4), CompoundingFrequency::Daily, dec!(12));
        assert_eq!(run(&input), run(&input));
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let huge = input(Decimal::MAX / dec!(2), dec!(100), dec!(3), CompoundingFrequency::Annual, dec!(0));
        let err = CompoundingSimulator::new().simulate(&huge).unwrap_err();
        assert_eq!(err, SimulationError::Overflow { period: 1 });
    }
}
