use bridge_domain_models::{
    consts,
    details::Details,
    payment_method_data::{CardData, CardDetails},
};
use bridge_interfaces::{
    api::{GatewayResponse, PendingOperation, ResponseData},
    errors::{BridgeError, GatewayError},
};
use common_utils::errors::{CustomResult, ValidationError};
use error_stack::{report, Report, ResultExt};
use router_env::logger;
use serde_json::Value;

/// Whether a previous action already recorded the outcome of the payment.
pub(crate) fn is_already_processed(details: &Details) -> bool {
    details.contains_key(consts::STATUS)
}

pub(crate) fn not_supported(action: &'static str) -> Report<BridgeError> {
    report!(BridgeError::RequestNotSupported { action })
}

pub(crate) fn send(
    operation: CustomResult<Box<dyn PendingOperation>, GatewayError>,
) -> CustomResult<GatewayResponse, BridgeError> {
    operation
        .and_then(|operation| operation.send())
        .change_context(BridgeError::GatewayCallFailed)
}

/// Rejects responses that only report success.
pub(crate) fn into_structured(
    response: GatewayResponse,
) -> CustomResult<ResponseData, BridgeError> {
    response
        .into_structured()
        .ok_or_else(|| report!(BridgeError::InvalidResponseShape))
}

/// Mappings are merged into the record, any other non-null payload is kept under `_data`.
pub(crate) fn merge_response_data(details: &mut Details, data: Value) {
    match data {
        Value::Null => logger::debug!("gateway response carries no data"),
        Value::Object(values) => details.merge(values),
        scalar => details.insert(consts::DATA, scalar),
    }
}

pub(crate) fn card_details(card: &CardData) -> CustomResult<CardDetails, BridgeError> {
    card.to_card_details().map_err(|report| {
        let field_name = match report.current_context() {
            ValidationError::MissingRequiredField { field_name } => field_name.clone(),
            other => other.to_string(),
        };
        report.change_context(BridgeError::InvalidCardData { field_name })
    })
}
