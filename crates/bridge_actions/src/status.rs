//! Status of a payment derived from its details record.

use std::str::FromStr;

use bridge_domain_models::{
    consts, details::Details, router_request_types::PaymentRequest,
    router_response_types::ActionOutcome,
};
use bridge_interfaces::{api::Action, errors::BridgeError};
use common_enums::Status;
use common_utils::errors::CustomResult;
use router_env::{instrument, logger, tracing};

use crate::helpers;

/// Classify a details record.
///
/// A `_status` marker decides when present: `captured` and `failed` are taken as they are, any
/// other marker is `unknown`. A record without a marker was not submitted yet and is `new`.
pub fn classify(details: &Details) -> Status {
    let Some(marker) = details.get(consts::STATUS) else {
        return Status::New;
    };

    marker
        .as_plain()
        .and_then(serde_json::Value::as_str)
        .and_then(|marker| Status::from_str(marker).ok())
        .filter(|status| status.is_recorded_marker())
        .unwrap_or(Status::Unknown)
}

/// Answers [`PaymentRequest::GetStatus`] requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusAction;

impl Action for StatusAction {
    fn name(&self) -> &'static str {
        "status"
    }

    fn supports(&self, request: &PaymentRequest) -> bool {
        matches!(request, PaymentRequest::GetStatus(_))
    }

    #[instrument(skip_all)]
    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError> {
        let PaymentRequest::GetStatus(get_status) = request else {
            return Err(helpers::not_supported(self.name()));
        };

        let status = classify(&get_status.details);
        logger::debug!(%status, "classified payment details");
        get_status.mark(status);

        Ok(ActionOutcome::Continue)
    }
}
