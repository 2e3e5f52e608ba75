use serde::{Deserialize, Serialize};

/// Metadata of an ISO-4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub name: String,
    pub alpha3: String,
    /// Number of fractional digits of the minor unit.
    pub exponent: u32,
    pub numeric: u16,
    pub country: Option<String>,
}
