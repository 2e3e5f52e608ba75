#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use bridge_domain_models::{
    currency::CurrencyInfo,
    details::{Details, GatewayParameters},
    payment_method_data::CardData,
    router_request_types::FirstModel,
    tokens::{Identity, Token},
};
use bridge_interfaces::{
    api::{
        CreditCardProvider, CurrencyLookup, GatewayCapabilities, GatewayResponse,
        GenericTokenFactory, PaymentGateway, PendingOperation, ResponseData,
    },
    errors::{CollaboratorError, GatewayError},
};
use common_utils::errors::CustomResult;
use error_stack::report;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Purchase,
    CompletePurchase,
}

/// Stage at which a failing gateway gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Building the request is refused.
    Request,
    /// The request is built but sending it fails.
    Send,
}

/// Gateway answering every call with the same response and recording the parameters.
#[derive(Debug)]
pub struct RecordingGateway {
    capabilities: GatewayCapabilities,
    response: GatewayResponse,
    failure: Option<Failure>,
    calls: Mutex<Vec<(Call, GatewayParameters)>>,
}

impl RecordingGateway {
    pub fn direct() -> Self {
        Self::new(GatewayCapabilities::DIRECT)
    }

    pub fn offsite() -> Self {
        Self::new(GatewayCapabilities::OFFSITE)
    }

    fn new(capabilities: GatewayCapabilities) -> Self {
        Self {
            capabilities,
            response: GatewayResponse::Structured(ResponseData {
                successful: true,
                ..Default::default()
            }),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn responding(mut self, response: GatewayResponse) -> Self {
        self.response = response;
        self
    }

    pub fn responding_with_data(self, data: Value) -> Self {
        self.responding(GatewayResponse::Structured(ResponseData {
            successful: true,
            data,
            ..Default::default()
        }))
    }

    pub fn calls(&self) -> Vec<(Call, GatewayParameters)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn record(
        &self,
        call: Call,
        parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError> {
        self.calls.lock().unwrap().push((call, parameters));
        match self.failure {
            None => Ok(Box::new(CannedOperation(Ok(self.response.clone())))),
            Some(Failure::Send) => Ok(Box::new(CannedOperation(Err(GatewayError::RequestFailed)))),
            Some(Failure::Request) => Err(report!(GatewayError::MissingRequiredParameter {
                field_name: "amount"
            })),
        }
    }
}

impl PaymentGateway for RecordingGateway {
    fn name(&self) -> &str {
        "Recording"
    }

    fn capabilities(&self) -> GatewayCapabilities {
        self.capabilities
    }

    fn purchase(
        &self,
        parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError> {
        self.record(Call::Purchase, parameters)
    }

    fn complete_purchase(
        &self,
        parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError> {
        self.record(Call::CompletePurchase, parameters)
    }
}

struct CannedOperation(Result<GatewayResponse, GatewayError>);

impl PendingOperation for CannedOperation {
    fn send(self: Box<Self>) -> CustomResult<GatewayResponse, GatewayError> {
        self.0.map_err(|error| report!(error))
    }
}

/// Card provider handing out a fixed card, or refusing every request when it has none.
#[derive(Debug, Default)]
pub struct StaticCardProvider {
    card: Option<CardData>,
    requests: Mutex<Vec<FirstModel>>,
}

impl StaticCardProvider {
    pub fn with_card(card: CardData) -> Self {
        Self {
            card: Some(card),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<FirstModel> {
        self.requests.lock().unwrap().clone()
    }
}

impl CreditCardProvider for StaticCardProvider {
    fn obtain_credit_card(
        &self,
        first_model: &FirstModel,
        _details: &Details,
    ) -> CustomResult<CardData, CollaboratorError> {
        self.requests.lock().unwrap().push(first_model.clone());
        self.card
            .clone()
            .ok_or_else(|| report!(CollaboratorError::RequestNotSupported))
    }
}

/// Token factory returning tokens whose target url is `theNotifyUrl`, or failing every request.
#[derive(Debug, Default)]
pub struct RecordingTokenFactory {
    failing: bool,
    requests: Mutex<Vec<(String, Identity)>>,
}

impl RecordingTokenFactory {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, Identity)> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenericTokenFactory for RecordingTokenFactory {
    fn create_notify_token(
        &self,
        gateway_name: &str,
        identity: &Identity,
    ) -> CustomResult<Token, CollaboratorError> {
        self.requests
            .lock()
            .unwrap()
            .push((gateway_name.to_string(), identity.clone()));
        if self.failing {
            return Err(report!(CollaboratorError::Failed));
        }
        Ok(Token::with_target_url("theNotifyUrl"))
    }
}

/// Currency lookup knowing `USD`, `JPY` and `XTS`, the latter with an exponent no amount can be
/// scaled by.
#[derive(Debug, Default)]
pub struct StaticCurrencyLookup;

impl CurrencyLookup for StaticCurrencyLookup {
    fn lookup(&self, code: &str) -> CustomResult<CurrencyInfo, CollaboratorError> {
        match code {
            "USD" => Ok(CurrencyInfo {
                name: "US Dollar".to_string(),
                alpha3: "USD".to_string(),
                exponent: 2,
                numeric: 840,
                country: Some("US".to_string()),
            }),
            "JPY" => Ok(CurrencyInfo {
                name: "Yen".to_string(),
                alpha3: "JPY".to_string(),
                exponent: 0,
                numeric: 392,
                country: Some("JP".to_string()),
            }),
            "XTS" => Ok(CurrencyInfo {
                name: "Testing".to_string(),
                alpha3: "XTS".to_string(),
                exponent: 30,
                numeric: 963,
                country: None,
            }),
            _ => Err(report!(CollaboratorError::NotFound {
                resource: "currency"
            })),
        }
    }
}
