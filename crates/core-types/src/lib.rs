pub mod enums;
pub mod error;
pub mod field;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::CompoundingFrequency;
pub use error::CoreError;
pub use field::{FieldId, RawField};
pub use structs::{
    AverageCostResult, AveragePrice, CompoundingInput, CompoundingRequest, CompoundingResult,
    PeriodRecord, PurchaseEntry, PurchaseLine, PurchaseRequest, ReturnPercent,
};
