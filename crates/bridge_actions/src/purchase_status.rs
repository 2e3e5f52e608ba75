//! Records the outcome of a direct purchase once its response is merged into the record.

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

/// Follows [`crate::CaptureAction`]: a merged `success` entry becomes `_status`, `captured` when
/// it is truthy and `failed` otherwise. Without such an entry the record is left alone.
#[derive(Debug, Clone)]
pub struct PurchaseStatusAction {
    gateway: Arc<dyn PaymentGateway>,
}

impl PurchaseStatusAction {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }
}

impl Action for PurchaseStatusAction {
    fn name(&self) -> &'static str {
        "purchase_status"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(request, PaymentRequest::Capture(_)) && self.gateway.capabilities().is_direct()
    }

    #[instrument(skip_all, fields(gateway = self.gateway.name()))]
    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError> {
        let PaymentRequest::Capture(capture) = request else {
            return Err(helpers::not_supported(self.name()));
        };
        if !self.gateway.capabilities().is_direct() {
            return Err(helpers::not_supported(self.name()));
        }

        if helpers::is_already_processed(&capture.details) {
            return Ok(ActionOutcome::Continue);
        }
        if !capture.details.contains_key(consts::SUCCESS) {
            logger::debug!("purchase response carries no success entry");
            return Ok(ActionOutcome::Continue);
        }

        let status = if capture.details.flag(consts::SUCCESS) {
            Status::Captured
        } else {
            Status::Failed
        };
        logger::info!(%status, "recording purchase outcome");
        capture.details.insert(consts::STATUS, status.to_string());

        Ok(ActionOutcome::Continue)
    }
}
