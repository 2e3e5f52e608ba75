//! Action contract and the traits of the wrapped gateway.

pub mod collaborators;
pub mod gateway;

use std::fmt::Debug;

use bridge_domain_models::{
    router_request_types::PaymentRequest, router_response_types::ActionOutcome,
};
use common_utils::errors::CustomResult;

pub use self::{
    collaborators::{CreditCardProvider, CurrencyLookup, GenericTokenFactory},
    gateway::{GatewayCapabilities, GatewayResponse, PaymentGateway, PendingOperation, ResponseData},
};
use crate::errors::BridgeError;

/// Handler of one kind of payment request.
///
/// The dispatcher asks every registered action in order whether it `supports` the request and
/// executes the first one that does. Executing an unsupported request fails with
/// [`BridgeError::RequestNotSupported`].
pub trait Action: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn supports(&self, request: &PaymentRequest) -> bool;

    fn execute(&self, request: &mut PaymentRequest) -> CustomResult<ActionOutcome, BridgeError>;
}
