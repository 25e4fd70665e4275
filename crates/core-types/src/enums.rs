use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often accrued interest is folded back into the balance.
///
/// The discriminant is the number of compounding periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    #[serde(alias = "annually")]
    Annual = 1,
    #[serde(alias = "semiannually")]
    SemiAnnual = 2,
    Quarterly = 4,
    Monthly = 12,
    Daily = 365,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annual,
        CompoundingFrequency::SemiAnnual,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Returns the number of compounding periods in one year.
    pub fn periods_per_year(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annual => "annual",
            CompoundingFrequency::SemiAnnual => "semiannual",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "annually" | "yearly" => Ok(CompoundingFrequency::Annual),
            "semiannual" | "semiannually" | "semi-annual" => Ok(CompoundingFrequency::SemiAnnual),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "daily" => Ok(CompoundingFrequency::Daily),
            other => Err(CoreError::InvalidInput(
                "compounding frequency".to_string(),
                format!("'{}' is not one of annual, semiannual, quarterly, monthly, daily", other),
            )),
        }
    }
}
