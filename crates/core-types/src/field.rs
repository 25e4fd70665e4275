use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric input exactly as a caller handed it over, before validation.
///
/// Callers that collect numbers from free-form text or loosely typed sources
/// map "nothing entered" to `Absent` rather than to zero, so the validator can
/// tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RawField {
    #[default]
    Absent,
    Value(Decimal),
    /// A number was supplied but it is NaN, infinite, or outside the decimal range.
    NotFinite,
}

impl RawField {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawField::Absent)
    }

    /// The supplied value, if it is a usable number.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            RawField::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Decimal> for RawField {
    fn from(value: Decimal) -> Self {
        RawField::Value(value)
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return RawField::NotFinite;
        }
        Decimal::from_f64(value).map_or(RawField::NotFinite, RawField::Value)
    }
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        RawField::Value(Decimal::from(value))
    }
}

impl<T: Into<RawField>> From<Option<T>> for RawField {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawField::Absent, Into::into)
    }
}

/// Identifies one input field so a caller can highlight it.
///
/// Purchase fields carry the 0-based position of their entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Principal,
    AnnualRate,
    Years,
    Contribution,
    PurchaseAmount(usize),
    UnitPrice(usize),
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Principal => f.write_str("principal"),
            FieldId::AnnualRate => f.write_str("annual rate"),
            FieldId::Years => f.write_str("years"),
            FieldId::Contribution => f.write_str("contribution"),
            FieldId::PurchaseAmount(i) => write!(f, "purchase[{}].amount", i + 1),
            FieldId::UnitPrice(i) => write!(f, "purchase[{}].unit price", i + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn non_finite_floats_are_flagged() {
        assert_eq!(RawField::from(f64::NAN), RawField::NotFinite);
        assert_eq!(RawField::from(f64::INFINITY), RawField::NotFinite);
        assert_eq!(RawField::from(f64::NEG_INFINITY), RawField::NotFinite);
    }

    #[test]
    fn options_map_none_to_absent() {
        assert_eq!(RawField::from(None::<Decimal>), RawField::Absent);
        assert_eq!(RawField::from(Some(dec!(12.5))), RawField::Value(dec!(12.5)));
        assert_eq!(RawField::from(Some(3.0_f64)), RawField::Value(dec!(3)));
    }

    #[test]
    fn purchase_fields_display_one_based() {
        assert_eq!(FieldId::PurchaseAmount(0).to_string(), "purchase[1].amount");
        assert_eq!(FieldId::UnitPrice(2).to_string(), "purchase[3].unit price");
    }
}
