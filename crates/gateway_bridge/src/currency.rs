//! Currency lookup backed by the ISO-4217 table.

use bridge_domain_models::currency::CurrencyInfo;
use bridge_interfaces::{api::CurrencyLookup, errors::CollaboratorError};
use common_utils::errors::CustomResult;
use error_stack::report;
use iso_currency::Currency;

#[derive(Debug, Default, Clone, Copy)]
pub struct IsoCurrencyLookup;

impl CurrencyLookup for IsoCurrencyLookup {
    fn lookup(&self, code: &str) -> CustomResult<CurrencyInfo, CollaboratorError> {
        let currency = Currency::from_code(&code.to_ascii_uppercase()).ok_or_else(|| {
            report!(CollaboratorError::NotFound {
                resource: "currency"
            })
            .attach_printable(format!("unknown currency code: {code}"))
        })?;

        Ok(CurrencyInfo {
            name: currency.name().to_string(),
            alpha3: currency.code().to_string(),
            // Funds and precious metals have no minor unit.
            exponent: currency.exponent().map(u32::from).unwrap_or_default(),
            numeric: currency.numeric(),
            country: currency
                .used_by()
                .first()
                .map(|country| format!("{country:?}")),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use test_case::test_case;

    use super::*;

    #[test_case("USD", 2, 840 ; "us dollar")]
    #[test_case("eur", 2, 978 ; "lower case code")]
    #[test_case("JPY", 0, 392 ; "yen has no minor unit")]
    #[test_case("BHD", 3, 48 ; "bahraini dinar has three decimals")]
    fn looks_up_iso_currencies(code: &str, exponent: u32, numeric: u16) {
        let currency = IsoCurrencyLookup.lookup(code).unwrap();

        assert_eq!(currency.alpha3, code.to_ascii_uppercase());
        assert_eq!(currency.exponent, exponent);
        assert_eq!(currency.numeric, numeric);
    }

    #[test]
    fn unknown_code_is_not_found() {
        let error = IsoCurrencyLookup.lookup("XYZ").unwrap_err();

        assert_eq!(
            error.current_context(),
            &CollaboratorError::NotFound {
                resource: "currency"
            }
        );
    }
}
