//! Two phase purchase through a gateway redirecting the customer.
//!
//! The first execution calls `purchase`. When the gateway asks for a redirect the record is
//! flagged with `_completeCaptureRequired` and the redirect is handed to the caller. Once the
//! customer is back, the next execution calls `completePurchase` and flags the record with
//! `_captureCompleted`, after which the gateway is not called anymore.

use std::sync::Arc;

use bridge_domain_models::{
    consts,
    router_request_types::{Capture, PaymentRequest},
    router_response_types::ActionOutcome,
};
use bridge_interfaces::{
    api::{Action, GenericTokenFactory, PaymentGateway},
    errors::BridgeError,
};
use common_utils::errors::CustomResult;
use error_stack::ResultExt;
use router_env::{instrument, logger, tracing};

use crate::helpers;

#[derive(Debug, Clone)]
pub struct OffsiteCaptureAction {
    gateway: Arc<dyn PaymentGateway>,
    token_factory: Option<Arc<dyn GenericTokenFactory>>,
}

impl OffsiteCaptureAction {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            gateway,
            token_factory: None,
        }
    }

    pub fn with_token_factory(mut self, token_factory: Arc<dyn GenericTokenFactory>) -> Self {
        self.token_factory = Some(token_factory);
        self
    }

    /// Fill the return, cancel and notify urls from the capture token unless they are set.
    fn populate_urls(&self, capture: &mut Capture) -> CustomResult<(), BridgeError> {
        let Some(token) = capture.first_model.as_token() else {
            return Ok(());
        };

        if let Some(target_url) = token.target_url() {
            capture
                .details
                .insert_if_absent(consts::RETURN_URL, target_url);
            capture
                .details
                .insert_if_absent(consts::CANCEL_URL, target_url);
        }

        if capture.details.contains_key(consts::NOTIFY_URL) {
            return Ok(());
        }
        let (Some(token_factory), Some(identity)) = (&self.token_factory, &token.details) else {
            return Ok(());
        };

        let notify_token = token_factory
            .create_notify_token(&token.gateway_name, identity)
            .change_context(BridgeError::TokenCreationFailed)
            .attach_printable_lazy(|| {
                format!("gateway name: {}, model: {}", token.gateway_name, identity.id)
            })?;
        if let Some(notify_url) = notify_token.target_url() {
            capture.details.insert(consts::NOTIFY_URL, notify_url);
        }

        Ok(())
    }
}

impl Action for OffsiteCaptureAction {
    fn name(&self) -> &'static str {
        "offsite_capture"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(request, PaymentRequest::Capture(_)) && self.gateway.capabilities().is_offsite()
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
            logger::debug!("payment already has a status, skipping offsite capture");
            return Ok(ActionOutcome::Continue);
        }

        self.populate_urls(capture)?;

        if capture.details.flag(consts::CAPTURE_COMPLETED) {
            logger::debug!("purchase already completed");
            return Ok(ActionOutcome::Continue);
        }

        let completing = capture.details.flag(consts::COMPLETE_CAPTURE_REQUIRED);
        let parameters = capture.details.to_gateway_parameters();
        let operation = if completing {
            logger::info!("completing purchase on the gateway");
            self.gateway.complete_purchase(parameters)
        } else {
            logger::info!("sending purchase to the gateway");
            self.gateway.purchase(parameters)
        };
        let response = helpers::into_structured(helpers::send(operation)?)?;
        let redirect = response.redirect;

        helpers::merge_response_data(&mut capture.details, response.data);

        if completing {
            capture.details.insert(consts::CAPTURE_COMPLETED, true);
            return Ok(ActionOutcome::Continue);
        }

        match redirect {
            Some(redirect) => {
                logger::info!(url = %redirect.url, "gateway requested a redirect");
                capture.details.insert(consts::COMPLETE_CAPTURE_REQUIRED, true);
                Ok(ActionOutcome::Redirect(redirect))
            }
            None => Ok(ActionOutcome::Continue),
        }
    }
}
