//! Purchase through a gateway that takes the card directly.

use std::sync::Arc;

use bridge_domain_models::{
    consts,
    payment_method_data::CardData,
    router_request_types::{Capture, PaymentRequest},
    router_response_types::ActionOutcome,
};
use bridge_interfaces::{
    api::{Action, CreditCardProvider, PaymentGateway},
    errors::BridgeError,
};
use common_utils::errors::CustomResult;
use error_stack::{report, ResultExt};
use router_env::{instrument, logger, tracing};

use crate::helpers;

#[derive(Debug, Clone)]
pub struct CaptureAction {
    gateway: Arc<dyn PaymentGateway>,
    credit_card_provider: Option<Arc<dyn CreditCardProvider>>,
}

impl CaptureAction {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            gateway,
            credit_card_provider: None,
        }
    }

    pub fn with_credit_card_provider(mut self, provider: Arc<dyn CreditCardProvider>) -> Self {
        self.credit_card_provider = Some(provider);
        self
    }

    fn obtain_credit_card(&self, capture: &Capture) -> CustomResult<CardData, BridgeError> {
        let provider = self
            .credit_card_provider
            .as_ref()
            .ok_or_else(|| report!(BridgeError::CreditCardRequired))
            .attach_printable("no credit card provider is configured")?;

        provider
            .obtain_credit_card(&capture.first_model, &capture.details)
            .map_err(|report| {
                if report.current_context().is_not_supported() {
                    logger::warn!("credit card provider does not support the request");
                }
                report.change_context(BridgeError::CreditCardRequired)
            })
    }
}

impl Action for CaptureAction {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(request, PaymentRequest::Capture(_)) && self.gateway.capabilities().is_direct()
    }

    #[instrument(skip_all, fields(gateway = self.gateway.name()))]
    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError> {
        if !self.supports(request) {
            return Err(helpers::not_supported(self.name()));
        }
        let PaymentRequest::Capture(capture) = request else {
            return Err(helpers::not_supported(self.name()));
        };

        if helpers::is_already_processed(&capture.details) {
            logger::debug!("payment already has a status, skipping capture");
            return Ok(ActionOutcome::Continue);
        }

        if !capture.details.contains_key(consts::CARD)
            && !capture.details.contains_key(consts::CARD_REFERENCE)
        {
            let card = self.obtain_credit_card(capture)?;
            helpers::card_details(&card)?.store_into(&mut capture.details);
        }

        let parameters = capture.details.to_gateway_parameters();
        logger::info!("sending purchase to the gateway");
        let response = helpers::send(self.gateway.purchase(parameters))?;
        let response = helpers::into_structured(response)?;
        logger::debug!(
            successful = response.successful,
            code = ?response.code,
            message = ?response.message,
            "purchase response received"
        );

        helpers::merge_response_data(&mut capture.details, response.data);

        Ok(ActionOutcome::Continue)
    }
}
