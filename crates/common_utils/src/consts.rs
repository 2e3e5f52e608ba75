//! Commonly used constants

/// Largest number of fractional digits an ISO-4217 currency uses today is 4; anything above the
/// precision of a `rust_decimal::Decimal` cannot be represented.
pub const MAX_CURRENCY_EXPONENT: u32 = 28;

/// Target format understood by payment conversion.
pub const CONVERSION_FORMAT_ARRAY: &str = "array";
