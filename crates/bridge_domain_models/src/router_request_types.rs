//! Typed requests dispatched to the bridge actions.

use common_enums::Status;
use common_utils::consts::CONVERSION_FORMAT_ARRAY;

use crate::{details::Details, payments::Payment, tokens::Token};

/// Object a request was originally created for.
#[derive(Debug, Clone, Default)]
pub enum FirstModel {
    /// The details record itself.
    #[default]
    Model,
    /// Capture or notify token of a redirect flow.
    Token(Token),
    Payment(Box<Payment>),
    /// Any other origin, e.g. an order.
    Other(serde_json::Value),
}

impl FirstModel {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Model | Self::Payment(_) | Self::Other(_) => None,
        }
    }
}

/// Capture a payment.
#[derive(Debug, Default)]
pub struct Capture {
    pub first_model: FirstModel,
    pub details: Details,
}

impl Capture {
    pub fn new(details: Details) -> Self {
        Self {
            first_model: FirstModel::Model,
            details,
        }
    }

    pub fn with_first_model(first_model: FirstModel, details: Details) -> Self {
        Self {
            first_model,
            details,
        }
    }
}

/// Asynchronous notification of the gateway about an offsite purchase.
#[derive(Debug, Default)]
pub struct Notify {
    pub details: Details,
}

impl Notify {
    pub fn new(details: Details) -> Self {
        Self { details }
    }
}

/// Status query. The status starts as `unknown` until an action marks it.
#[derive(Debug)]
pub struct GetStatus {
    pub details: Details,
    status: Status,
}

impl GetStatus {
    pub fn new(details: Details) -> Self {
        Self {
            details,
            status: Status::Unknown,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mark(&mut self, status: Status) {
        self.status = status;
    }

    pub fn into_details(self) -> Details {
        self.details
    }
}

/// Source of a conversion.
#[derive(Debug, Clone)]
pub enum ConvertSource {
    Payment(Box<Payment>),
    Other(serde_json::Value),
}

/// Convert a source object into another representation, e.g. a payment into a details record.
#[derive(Debug)]
pub struct Convert {
    pub source: ConvertSource,
    pub to: String,
    result: Option<Details>,
}

impl Convert {
    pub fn new(source: ConvertSource, to: impl Into<String>) -> Self {
        Self {
            source,
            to: to.into(),
            result: None,
        }
    }

    pub fn payment_to_array(payment: Payment) -> Self {
        Self::new(
            ConvertSource::Payment(Box::new(payment)),
            CONVERSION_FORMAT_ARRAY,
        )
    }

    pub fn payment(&self) -> Option<&Payment> {
        match &self.source {
            ConvertSource::Payment(payment) => Some(payment),
            ConvertSource::Other(_) => None,
        }
    }

    pub fn set_result(&mut self, result: Details) {
        self.result = Some(result);
    }

    pub fn result(&self) -> Option<&Details> {
        self.result.as_ref()
    }

    pub fn take_result(&mut self) -> Option<Details> {
        self.result.take()
    }
}

/// Request handed to the bridge dispatcher.
#[derive(Debug)]
pub enum PaymentRequest {
    Capture(Capture),
    Notify(Notify),
    Convert(Convert),
    GetStatus(GetStatus),
}

impl PaymentRequest {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Capture(_) => "capture",
            Self::Notify(_) => "notify",
            Self::Convert(_) => "convert",
            Self::GetStatus(_) => "get_status",
        }
    }
}

impl From<Capture> for PaymentRequest {
    fn from(request: Capture) -> Self {
        Self::Capture(request)
    }
}

impl From<Notify> for PaymentRequest {
    fn from(request: Notify) -> Self {
        Self::Notify(request)
    }
}

impl From<Convert> for PaymentRequest {
    fn from(request: Convert) -> Self {
        Self::Convert(request)
    }
}

impl From<GetStatus> for PaymentRequest {
    fn from(request: GetStatus) -> Self {
        Self::GetStatus(request)
    }
}
