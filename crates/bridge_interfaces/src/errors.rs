//! Error contexts of the bridge.

/// Errors surfaced by the bridge actions and the gateway factory.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BridgeError {
    #[error("Action {action} does not support the given request")]
    RequestNotSupported { action: &'static str },
    #[error(
        "Credit card details has to be set explicitly or there has to be an action that supports ObtainCreditCard request."
    )]
    CreditCardRequired,
    #[error(
        "The bridge supports only responses which extends AbstractResponse. Their ResponseInterface is useless."
    )]
    InvalidResponseShape,
    #[error("The type fields are required.")]
    MissingGatewayType,
    #[error("Given gateway type {gateway_type} or class is not supported.")]
    UnsupportedGatewayType { gateway_type: String },
    #[error("Invalid card data: {field_name} is missing")]
    InvalidCardData { field_name: String },
    #[error("Failed to look up the currency")]
    CurrencyLookupFailed,
    #[error("Failed to create the notify token")]
    TokenCreationFailed,
    #[error("Gateway call failed")]
    GatewayCallFailed,
    #[error("Failed to convert the amount into major units")]
    InvalidAmount,
}

/// Errors raised by a wrapped gateway.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GatewayError {
    #[error("Gateway does not support the {operation} operation")]
    NotSupported { operation: &'static str },
    #[error("Missing required parameter: {field_name}")]
    MissingRequiredParameter { field_name: &'static str },
    #[error("Failed to send the request to the gateway")]
    RequestFailed,
}

/// Errors raised by the collaborators injected into the actions.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CollaboratorError {
    /// The collaborator cannot handle this request; the caller decides whether it is fatal.
    #[error("Request is not supported by the collaborator")]
    RequestNotSupported,
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("Collaborator failed to process the request")]
    Failed,
}

impl CollaboratorError {
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::RequestNotSupported)
    }
}
