//! Completes an offsite purchase when the gateway notifies about it.

use std::sync::Arc;

use bridge_domain_models::{
    consts, router_request_types::PaymentRequest, router_response_types::ActionOutcome,
};
use bridge_interfaces::{
    api::{Action, PaymentGateway},
    errors::BridgeError,
};
use common_enums::Status;
use common_utils::errors::CustomResult;
use router_env::{instrument, logger, tracing};

use crate::helpers;

/// Records the outcome of the completion in `_status` and acknowledges the notification with
/// `200`.
#[derive(Debug, Clone)]
pub struct NotifyAction {
    gateway: Arc<dyn PaymentGateway>,
}

impl NotifyAction {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }
}

impl Action for NotifyAction {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(request, PaymentRequest::Notify(_)) && self.gateway.capabilities().is_offsite()
    }

    #[instrument(skip_all, fields(gateway = self.gateway.name()))]
    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError> {
        if !self.supports(request) {
            return Err(helpers::not_supported(self.name()));
        }
        let PaymentRequest::Notify(notify) = request else {
            return Err(helpers::not_supported(self.name()));
        };

        if helpers::is_already_processed(&notify.details) {
            logger::debug!("payment already has a status, acknowledging notification");
            return Ok(ActionOutcome::acknowledge());
        }

        let parameters = notify.details.to_gateway_parameters();
        let response = helpers::send(self.gateway.complete_purchase(parameters))?;

        let status = if response.is_successful() {
            Status::Captured
        } else {
            Status::Failed
        };
        logger::info!(%status, "gateway notified about the purchase");
        notify.details.insert(consts::STATUS, status.to_string());

        Ok(ActionOutcome::acknowledge())
    }
}
