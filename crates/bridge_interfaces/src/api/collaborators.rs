//! Capabilities injected into the actions.

use std::fmt::Debug;

use bridge_domain_models::{
    currency::CurrencyInfo,
    details::Details,
    payment_method_data::CardData,
    router_request_types::FirstModel,
    tokens::{Identity, Token},
};
use common_utils::errors::CustomResult;

use crate::errors::CollaboratorError;

/// Obtains the card of a customer, e.g. by rendering a card form.
///
/// Answers [`CollaboratorError::RequestNotSupported`] when it cannot serve the given model.
pub trait CreditCardProvider: Debug + Send + Sync {
    fn obtain_credit_card(
        &self,
        first_model: &FirstModel,
        details: &Details,
    ) -> CustomResult<CardData, CollaboratorError>;
}

/// Creates the tokens backing notify urls.
pub trait GenericTokenFactory: Debug + Send + Sync {
    fn create_notify_token(
        &self,
        gateway_name: &str,
        identity: &Identity,
    ) -> CustomResult<Token, CollaboratorError>;
}

pub trait CurrencyLookup: Debug + Send + Sync {
    fn lookup(&self, code: &str) -> CustomResult<CurrencyInfo, CollaboratorError>;
}
