//! Types that can be used in other crates

use error_stack::{report, ResultExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    consts::MAX_CURRENCY_EXPONENT,
    errors::{CustomResult, ValidationError},
};

/// This Unit struct represents MinorUnit in which core amount works
#[derive(
    Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Convert the amount to its major denomination given the number of fractional digits of
    /// the currency. The result is exact and keeps `exponent` fractional digits, so `123` with
    /// exponent `2` is `1.23` and `100` with exponent `0` is `100`.
    pub fn to_major_unit_as_decimal(
        self,
        exponent: u32,
    ) -> CustomResult<Decimal, ValidationError> {
        if exponent > MAX_CURRENCY_EXPONENT {
            return Err(report!(ValidationError::InvalidValue {
                message: format!("currency exponent {exponent} is out of range"),
            }));
        }

        Decimal::try_new(self.0, exponent).change_context(ValidationError::InvalidValue {
            message: format!("amount {} cannot be scaled by 10^{exponent}", self.0),
        })
    }

    /// Same as [`Self::to_major_unit_as_decimal`], rendered as a string.
    pub fn to_major_unit_as_string(self, exponent: u32) -> CustomResult<String, ValidationError> {
        self.to_major_unit_as_decimal(exponent)
            .map(|amount| amount.to_string())
    }
}

impl std::fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MinorUnit {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
