use crate::error::{FieldFault, ValidationError};
use core_types::{FieldId, RawField};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// What a field must satisfy to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must be present and finite.
    Required,
    /// Must be present, finite and `>= 0`.
    NonNegative,
    /// Must be present, finite and `> 0`.
    Positive,
    /// May be absent (read as zero); a supplied value must still be finite.
    Optional,
}

/// Checks a single raw value against a rule.
pub fn check_field(raw: RawField, rule: FieldRule) -> Option<FieldFault> {
    let value = match raw {
        RawField::Absent if rule == FieldRule::Optional => return None,
        RawField::Absent => return Some(FieldFault::Absent),
        RawField::NotFinite => return Some(FieldFault::NotFinite),
        RawField::Value(v) => v,
    };

    match rule {
        FieldRule::NonNegative if value < Decimal::ZERO => Some(FieldFault::Negative),
        FieldRule::Positive if value <= Decimal::ZERO => Some(FieldFault::NotPositive),
        _ => None,
    }
}

/// Per-field outcome of a validation pass.
///
/// Every submitted field has an entry in `flags`, `true` meaning invalid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    flags: BTreeMap<FieldId, bool>,
    faults: BTreeMap<FieldId, FieldFault>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for `field`. A later fault for the same field replaces an earlier one.
    pub fn record(&mut self, field: FieldId, fault: Option<FieldFault>) {
        let flag = self.flags.entry(field).or_insert(false);
        if let Some(fault) = fault {
            *flag = true;
            self.faults.insert(field, fault);
        }
    }

    pub fn flags(&self) -> &BTreeMap<FieldId, bool> {
        &self.flags
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    pub fn fault(&self, field: FieldId) -> Option<FieldFault> {
        self.faults.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.faults.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.faults.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            faults: self.faults.into_iter().collect(),
        })
    }
}

/// Checks every field and reports all failures together.
pub fn validate_fields(fields: &[(FieldId, RawField, FieldRule)]) -> ValidationReport {
    let mut report = ValidationReport::new();
    for &(field, raw, rule) in fields {
        report.record(field, check_field(raw, rule));
    }
    report
}
