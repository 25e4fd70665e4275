use core_types::FieldId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFault {
    #[error("a value is required")]
    Absent,

    #[error("the value is not a finite number")]
    NotFinite,

    #[error("the value must not be negative")]
    Negative,

    #[error("the value must be greater than zero")]
    NotPositive,

    #[error("the simulation would exceed the limit of {limit} compounding periods")]
    ExceedsPeriodCap { limit: u64 },
}

/// Every field that failed validation, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Invalid input in {} field(s): {}", .faults.len(), describe(.faults))]
pub struct ValidationError {
    pub faults: Vec<(FieldId, FieldFault)>,
}

impl ValidationError {
    /// The identities of all failing fields.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.faults.iter().map(|(field, _)| *field)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.faults.iter().any(|(f, _)| *f == field)
    }

    pub fn fault_for(&self, field: FieldId) -> Option<FieldFault> {
        self.faults
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, fault)| *fault)
    }
}

fn describe(faults: &[(FieldId, FieldFault)]) -> String {
    faults
        .iter()
        .map(|(field, fault)| format!("{} ({})", field, fault))
        .collect::<Vec<_>>()
        .join(", ")
}
