//! Conversion of a payment into the details record consumed by the capture actions.

use std::sync::Arc;

use bridge_domain_models::{
    consts,
    details::Details,
    payments::Payment,
    router_request_types::{ConvertSource, PaymentRequest},
    router_response_types::ActionOutcome,
};
use bridge_interfaces::{
    api::{Action, CurrencyLookup},
    errors::BridgeError,
};
use common_utils::{consts::CONVERSION_FORMAT_ARRAY, errors::CustomResult};
use error_stack::ResultExt;
use router_env::{instrument, logger, tracing};

use crate::helpers;

#[derive(Debug, Clone)]
pub struct ConvertPaymentAction {
    currency_lookup: Arc<dyn CurrencyLookup>,
}

impl ConvertPaymentAction {
    pub fn new(currency_lookup: Arc<dyn CurrencyLookup>) -> Self {
        Self { currency_lookup }
    }

    /// Build the details of a payment. Entries already present on the payment are kept.
    pub fn convert(&self, payment: &Payment) -> CustomResult<Details, BridgeError> {
        let mut details = Details::from(payment.details.clone());

        let currency = self
            .currency_lookup
            .lookup(&payment.currency_code)
            .change_context(BridgeError::CurrencyLookupFailed)
            .attach_printable_lazy(|| format!("currency code: {}", payment.currency_code))?;
        let amount = payment
            .total_amount
            .to_major_unit_as_string(currency.exponent)
            .change_context(BridgeError::InvalidAmount)?;

        details.insert_if_absent(consts::AMOUNT, amount);
        for (key, value) in [
            (consts::CURRENCY, Some(&payment.currency_code)),
            (consts::DESCRIPTION, payment.description.as_ref()),
            (consts::CLIENT_ID, payment.client_id.as_ref()),
            (consts::CLIENT_EMAIL, payment.client_email.as_ref()),
        ] {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                details.insert_if_absent(key, value.as_str());
            }
        }

        if let Some(card) = &payment.credit_card {
            helpers::card_details(card)?.store_into(&mut details);
        }

        Ok(details)
    }
}

impl Action for ConvertPaymentAction {
    fn name(&self) -> &'static str {
        "convert_payment"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(
            request,
            PaymentRequest::Convert(convert)
                if matches!(convert.source, ConvertSource::Payment(_))
                    && convert.to == CONVERSION_FORMAT_ARRAY
        )
    }

    #[instrument(skip_all)]
    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError> {
        let PaymentRequest::Convert(convert) = request else {
            return Err(helpers::not_supported(self.name()));
        };
        let Some(payment) = convert.payment().filter(|_| convert.to == CONVERSION_FORMAT_ARRAY)
        else {
            return Err(helpers::not_supported(self.name()));
        };

        let details = self.convert(payment)?;
        logger::debug!(
            number = ?payment.number,
            entries = details.len(),
            "converted payment into details"
        );
        convert.set_result(details);

        Ok(ActionOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use bridge_domain_models::{
        details::DetailValue,
        payment_method_data::CardData,
        router_request_types::{Capture, Convert},
    };
    use common_utils::types::MinorUnit;
    use masking::{Secret, StrongSecret};
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use test_case::test_case;
    use time::macros::date;

    use super::*;
    use crate::test_utils::StaticCurrencyLookup;

    fn action() -> ConvertPaymentAction {
        ConvertPaymentAction::new(Arc::new(StaticCurrencyLookup))
    }

    fn payment() -> Payment {
        Payment {
            number: Some("theNumber".to_string()),
            currency_code: "USD".to_string(),
            total_amount: MinorUnit::new(123),
            description: Some("the description".to_string()),
            client_id: Some("theClientId".to_string()),
            client_email: Some("theClientEmail".to_string()),
            ..Default::default()
        }
    }

    fn converted(payment: Payment) -> Details {
        let mut request = PaymentRequest::from(Convert::payment_to_array(payment));
        action().execute(&mut request).unwrap();
        let PaymentRequest::Convert(mut convert) = request else {
            panic!("request kind changed");
        };
        convert.take_result().unwrap()
    }

    #[test]
    fn supports_payment_to_array_only() {
        let action = action();

        assert!(action.supports(&Convert::payment_to_array(payment()).into()));
        assert!(!action.supports(
            &Convert::new(ConvertSource::Payment(Box::new(payment())), "object").into()
        ));
        assert!(!action.supports(&Convert::new(ConvertSource::Other(json!({})), "array").into()));
        assert!(!action.supports(&Capture::new(Details::new()).into()));
    }

    #[test]
    fn converts_payment_fields() {
        let details = converted(payment());

        assert_eq!(
            details.to_json(),
            json!({
                "amount": "1.23",
                "currency": "USD",
                "description": "the description",
                "clientId": "theClientId",
                "clientEmail": "theClientEmail",
            })
        );
    }

    #[test_case("USD", 123, "1.23" ; "two decimals")]
    #[test_case("JPY", 123, "123" ; "no decimals")]
    #[test_case("USD", 100, "1.00" ; "keeps trailing zeros")]
    fn scales_amount_by_currency_exponent(currency: &str, total: i64, expected: &str) {
        let details = converted(Payment {
            currency_code: currency.to_string(),
            total_amount: MinorUnit::new(total),
            ..payment()
        });

        assert_eq!(details.get_str("amount"), Some(expected));
    }

    #[test]
    fn keeps_details_already_set_on_payment() {
        let mut preset = serde_json::Map::new();
        preset.insert("foo".to_string(), Value::from("fooVal"));
        preset.insert("amount".to_string(), Value::from("9.99"));

        let details = converted(Payment {
            details: preset,
            ..payment()
        });

        assert_eq!(details.get_str("foo"), Some("fooVal"));
        assert_eq!(details.get_str("amount"), Some("9.99"));
    }

    #[test]
    fn skips_empty_payment_fields() {
        let details = converted(Payment {
            description: Some(String::new()),
            client_id: None,
            ..payment()
        });

        assert!(!details.contains_key("description"));
        assert!(!details.contains_key("clientId"));
        assert_eq!(details.get_str("clientEmail"), Some("theClientEmail"));
    }

    #[test]
    fn embeds_sensitive_card() {
        let mut details = converted(Payment {
            credit_card: Some(CardData {
                number: Some(StrongSecret::new("4111111111111111".to_string())),
                security_code: Some(StrongSecret::new("123".to_string())),
                expire_at: Some(date!(2010 - 11 - 12)),
                holder: Some(Secret::new("John Doe".to_string())),
                token: None,
            }),
            ..payment()
        });

        match details.remove("card") {
            Some(DetailValue::Sensitive(mut card)) => assert_eq!(
                card.peek(),
                Some(json!({
                    "number": "4111111111111111",
                    "cvv": "123",
                    "expiryMonth": "11",
                    "expiryYear": "10",
                    "firstName": "John Doe",
                    "lastName": "",
                }))
            ),
            other => panic!("expected a sensitive card, got {other:?}"),
        }
    }

    #[test]
    fn embeds_card_reference_for_tokenized_card() {
        let details = converted(Payment {
            credit_card: Some(CardData::tokenized("theCardToken")),
            ..payment()
        });

        assert_eq!(details.get_str("cardReference"), Some("theCardToken"));
        assert!(!details.contains_key("card"));
    }

    #[test]
    fn leaves_payment_untouched() {
        let mut request = PaymentRequest::from(Convert::payment_to_array(payment()));

        action().execute(&mut request).unwrap();

        let PaymentRequest::Convert(convert) = request else {
            panic!("request kind changed");
        };
        assert!(convert.payment().unwrap().details.is_empty());
    }

    #[test]
    fn unknown_currency_fails() {
        let mut request = PaymentRequest::from(Convert::payment_to_array(Payment {
            currency_code: "XYZ".to_string(),
            ..payment()
        }));

        let error = action().execute(&mut request).unwrap_err();

        assert_eq!(error.current_context(), &BridgeError::CurrencyLookupFailed);
    }

    proptest! {
        #[test]
        fn two_decimal_amounts_are_exact(total in 0i64..10_000_000) {
            let details = converted(Payment {
                total_amount: MinorUnit::new(total),
                ..payment()
            });

            prop_assert_eq!(
                details.get_str("amount").map(str::to_string),
                Some(format!("{}.{:02}", total / 100, total % 100))
            );
        }
    }

    #[test]
    fn amount_beyond_decimal_precision_is_rejected() {
        let mut request = PaymentRequest::from(Convert::payment_to_array(Payment {
            currency_code: "XTS".to_string(),
            ..payment()
        }));

        let error = action().execute(&mut request).unwrap_err();

        assert_eq!(error.current_context(), &BridgeError::InvalidAmount);
        let PaymentRequest::Convert(convert) = request else {
            panic!("request kind changed");
        };
        assert!(convert.result().is_none());
    }
}
