use crate::error::{FieldFault, ValidationError};
use crate::rules::{FieldRule, ValidationReport, validate_fields};
use core_types::{
    CompoundingInput, CompoundingRequest, FieldId, PurchaseEntry, PurchaseRequest, RawField,
};
use rust_decimal::Decimal;

/// Upper bound on simulated periods when no configuration is supplied.
pub const DEFAULT_MAX_TOTAL_PERIODS: u64 = 100_000;

/// Turns raw requests into validated inputs, or reports every offending field.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    max_total_periods: u64,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOTAL_PERIODS)
    }
}

impl InputValidator {
    pub fn new(max_total_periods: u64) -> Self {
        Self { max_total_periods }
    }

    pub fn max_total_periods(&self) -> u64 {
        self.max_total_periods
    }

    /// Produces the per-field flags for a compounding request.
    pub fn check_compounding(&self, request: &CompoundingRequest) -> ValidationReport {
        let mut report = validate_fields(&[
            (FieldId::Principal, request.principal, FieldRule::NonNegative),
            (FieldId::AnnualRate, request.annual_rate_percent, FieldRule::Required),
            (FieldId::Years, request.years, FieldRule::NonNegative),
            (FieldId::Contribution, request.contribution_per_period, FieldRule::Optional),
        ]);

        // The period cap only means something once `years` itself is usable.
        if let (false, Some(years)) = (report.is_invalid(FieldId::Years), request.years.value()) {
            let periods = years
                .checked_mul(Decimal::from(request.frequency.periods_per_year()))
                .map(|p| p.trunc());
            let within_cap = periods.is_some_and(|p| p <= Decimal::from(self.max_total_periods));
            if !within_cap {
                report.record(
                    FieldId::Years,
                    Some(FieldFault::ExceedsPeriodCap { limit: self.max_total_periods }),
                );
            }
        }

        report
    }

    /// Validates a compounding request and builds the simulator input.
    pub fn validate_compounding(
        &self,
        request: &CompoundingRequest,
    ) -> Result<CompoundingInput, ValidationError> {
        let report = self.check_compounding(request);
        if report.has_errors() {
            tracing::debug!(?report, "Compounding request rejected.");
        }
        report.into_result()?;

        Ok(CompoundingInput {
            principal: present(request.principal),
            annual_rate_percent: present(request.annual_rate_percent),
            years: present(request.years),
            frequency: request.frequency,
            contribution_per_period: present(request.contribution_per_period),
        })
    }

    /// Produces the per-field flags for a list of purchases.
    pub fn check_purchases(&self, requests: &[PurchaseRequest]) -> ValidationReport {
        let fields: Vec<_> = requests
            .iter()
            .enumerate()
            .flat_map(|(i, req)| {
                [
                    (FieldId::PurchaseAmount(i), req.amount, FieldRule::Required),
                    (FieldId::UnitPrice(i), req.unit_price, FieldRule::Positive),
                ]
            })
            .collect();
        validate_fields(&fields)
    }

    /// Validates every purchase and builds the aggregator input.
    pub fn validate_purchases(
        &self,
        requests: &[PurchaseRequest],
    ) -> Result<Vec<PurchaseEntry>, ValidationError> {
        let report = self.check_purchases(requests);
        if report.has_errors() {
            tracing::debug!(?report, "Purchase entries rejected.");
        }
        report.into_result()?;

        Ok(requests
            .iter()
            .map(|req| PurchaseEntry::new(present(req.amount), present(req.unit_price)))
            .collect())
    }
}

/// Reads a field that has already passed validation. Absent optional fields read as zero.
fn present(raw: RawField) -> Decimal {
    raw.value().unwrap_or(Decimal::ZERO)
}
