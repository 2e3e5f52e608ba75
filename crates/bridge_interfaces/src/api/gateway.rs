use std::fmt::Debug;

use bridge_domain_models::{details::GatewayParameters, router_response_types::RedirectForm};
use common_enums::GatewayKind;
use common_utils::errors::CustomResult;
use error_stack::report;
use serde_json::Value;

use crate::errors::GatewayError;

/// Operations a gateway exposes.
///
/// A gateway with a `complete_purchase` phase redirects the customer and is driven by the
/// offsite actions; any other purchasing gateway takes the card directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewayCapabilities {
    pub purchase: bool,
    pub complete_purchase: bool,
}

impl GatewayCapabilities {
    pub const DIRECT: Self = Self {
        purchase: true,
        complete_purchase: false,
    };

    pub const OFFSITE: Self = Self {
        purchase: true,
        complete_purchase: true,
    };

    pub fn kind(self) -> Option<GatewayKind> {
        match (self.purchase, self.complete_purchase) {
            (true, true) => Some(GatewayKind::Offsite),
            (true, false) => Some(GatewayKind::Direct),
            (false, _) => None,
        }
    }

    pub fn is_direct(self) -> bool {
        self.kind() == Some(GatewayKind::Direct)
    }

    pub fn is_offsite(self) -> bool {
        self.kind() == Some(GatewayKind::Offsite)
    }
}

/// Wrapped payment gateway client.
pub trait PaymentGateway: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn capabilities(&self) -> GatewayCapabilities;

    fn purchase(
        &self,
        parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError>;

    fn complete_purchase(
        &self,
        _parameters: GatewayParameters,
    ) -> CustomResult<Box<dyn PendingOperation>, GatewayError> {
        Err(report!(GatewayError::NotSupported {
            operation: "completePurchase",
        }))
    }
}

/// Prepared gateway request.
pub trait PendingOperation: Send {
    fn send(self: Box<Self>) -> CustomResult<GatewayResponse, GatewayError>;
}

/// Response of a sent operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    Structured(ResponseData),
    /// Response which only tells whether the call succeeded.
    Opaque { successful: bool },
}

impl GatewayResponse {
    pub fn is_successful(&self) -> bool {
        match self {
            Self::Structured(data) => data.successful,
            Self::Opaque { successful } => *successful,
        }
    }

    pub fn into_structured(self) -> Option<ResponseData> {
        match self {
            Self::Structured(data) => Some(data),
            Self::Opaque { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseData {
    pub successful: bool,
    /// Set when the customer has to be sent to the gateway.
    pub redirect: Option<RedirectForm>,
    pub message: Option<String>,
    pub code: Option<String>,
    pub transaction_reference: Option<String>,
    /// Raw response payload: a mapping, a scalar or `null`.
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_classify_gateways() {
        assert!(GatewayCapabilities::DIRECT.is_direct());
        assert!(!GatewayCapabilities::DIRECT.is_offsite());
        assert!(GatewayCapabilities::OFFSITE.is_offsite());
        assert!(!GatewayCapabilities::OFFSITE.is_direct());
        assert_eq!(GatewayCapabilities::default().kind(), None);
    }

    #[test]
    fn opaque_response_is_not_structured() {
        let response = GatewayResponse::Opaque { successful: true };

        assert!(response.is_successful());
        assert_eq!(response.into_structured(), None);
    }
}
