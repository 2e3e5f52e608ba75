//! Gateway which never leaves the process, used to exercise the bridge end to end.
//!
//! Card numbers ending with an even digit are approved, any other number is declined. Options of
//! the gateway configuration act as default purchase parameters.

use bridge_domain_models::{consts, details::GatewayParameters};
use bridge_interfaces::{
    api::{GatewayCapabilities, GatewayResponse, PaymentGateway, PendingOperation, ResponseData},
    errors::GatewayError,
};
use common_utils::errors::CustomResult;
use error_stack::report;
use router_env::logger;
use serde_json::{json, Value};

pub const DUMMY: &str = "Dummy";

#[derive(Debug, Clone, Default)]
pub struct DummyGateway {
    test_mode: bool,
    defaults: GatewayParameters,
}

impl DummyGateway {
    pub fn new(test_mode: bool) -> Self {
        Self {
            test_mode,
            defaults: GatewayParameters::new(),
        }
    }

    /// Parameters filled into every purchase which does not set them itself.
    pub fn with_defaults(mut self, defaults: GatewayParameters) -> Self {
        self.defaults = defaults;
        self
    }
}

impl PaymentGateway for DummyGateway {
    fn name(&self) -> &str {
        DUMMY
    }

    fn capabilities(&self) -> GatewayCapabilities {
        GatewayCapabilities::DIRECT
    }

    fn purchase(
        &self,
        mut parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError> {
        for (key, value) in &self.defaults {
            parameters
                .entry(key.as_str())
                .or_insert_with(|| value.clone());
        }

        let amount = parameters
            .get(consts::AMOUNT)
            .filter(|amount| !amount.is_null())
            .cloned()
            .ok_or_else(|| {
                report!(GatewayError::MissingRequiredParameter {
                    field_name: consts::AMOUNT
                })
            })?;
        let card_number = parameters
            .get(consts::CARD)
            .and_then(|card| card.get(consts::card::NUMBER))
            .and_then(Value::as_str)
            .filter(|number| !number.is_empty())
            .ok_or_else(|| {
                report!(GatewayError::MissingRequiredParameter {
                    field_name: consts::card::NUMBER
                })
            })?;

        Ok(Box::new(DummyPurchase {
            amount,
            approved: is_approved(card_number),
            test_mode: self.test_mode,
        }))
    }
}

fn is_approved(card_number: &str) -> bool {
    card_number
        .chars()
        .last()
        .and_then(|digit| digit.to_digit(10))
        .is_some_and(|digit| digit % 2 == 0)
}

struct DummyPurchase {
    amount: Value,
    approved: bool,
    test_mode: bool,
}

impl PendingOperation for DummyPurchase {
    fn send(self: Box<Self>) -> CustomResult<GatewayResponse, GatewayError> {
        let reference = uuid::Uuid::new_v4().simple().to_string();
        let message = if self.approved { "Success" } else { "Failure" };
        logger::debug!(
            approved = self.approved,
            test_mode = self.test_mode,
            "dummy gateway processed a purchase"
        );

        Ok(GatewayResponse::Structured(ResponseData {
            successful: self.approved,
            redirect: None,
            message: Some(message.to_string()),
            code: None,
            transaction_reference: Some(reference.clone()),
            data: json!({
                "amount": self.amount,
                "reference": reference,
                "success": self.approved,
                "message": message,
            }),
        }))
    }
}
