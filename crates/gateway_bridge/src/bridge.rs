//! Dispatcher routing payment requests to the actions of a gateway.

use std::sync::Arc;

use bridge_actions::{
    CaptureAction, ConvertPaymentAction, NotifyAction, OffsiteCaptureAction,
    PurchaseStatusAction, StatusAction,
};
use bridge_domain_models::{
    details::Details,
    router_request_types::{GetStatus, PaymentRequest},
    router_response_types::ActionOutcome,
};
use bridge_interfaces::{
    api::{Action, CreditCardProvider, CurrencyLookup, GenericTokenFactory, PaymentGateway},
    errors::BridgeError,
};
use common_enums::Status;
use common_utils::errors::CustomResult;
use error_stack::report;
use router_env::{instrument, logger, tracing};

use crate::currency::IsoCurrencyLookup;

/// Gateway wrapped into the bridge actions.
///
/// Actions are tried in registration order: capture, offsite capture, notify, payment conversion
/// and status. The first one supporting a request executes it. When it lets the request continue,
/// every follow-up action supporting the request runs after it, e.g. recording the outcome of a
/// direct purchase.
#[derive(Debug, Clone)]
pub struct BridgeGateway {
    api: Arc<dyn PaymentGateway>,
    credit_card_provider: Option<Arc<dyn CreditCardProvider>>,
    token_factory: Option<Arc<dyn GenericTokenFactory>>,
    currency_lookup: Arc<dyn CurrencyLookup>,
    actions: Vec<Arc<dyn Action>>,
    follow_ups: Vec<Arc<dyn Action>>,
}

impl BridgeGateway {
    pub fn new(api: Arc<dyn PaymentGateway>) -> Self {
        let mut gateway = Self {
            api,
            credit_card_provider: None,
            token_factory: None,
            currency_lookup: Arc::new(IsoCurrencyLookup),
            actions: Vec::new(),
            follow_ups: Vec::new(),
        };
        gateway.register_actions();
        gateway
    }

    pub fn with_credit_card_provider(mut self, provider: Arc<dyn CreditCardProvider>) -> Self {
        self.credit_card_provider = Some(provider);
        self.register_actions();
        self
    }

    pub fn with_token_factory(mut self, token_factory: Arc<dyn GenericTokenFactory>) -> Self {
        self.token_factory = Some(token_factory);
        self.register_actions();
        self
    }

    pub fn with_currency_lookup(mut self, currency_lookup: Arc<dyn CurrencyLookup>) -> Self {
        self.currency_lookup = currency_lookup;
        self.register_actions();
        self
    }

    pub fn api(&self) -> &Arc<dyn PaymentGateway> {
        &self.api
    }

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|action| action.name()).collect()
    }

    pub fn follow_up_names(&self) -> Vec<&'static str> {
        self.follow_ups.iter().map(|action| action.name()).collect()
    }

    fn register_actions(&mut self) {
        let mut capture = CaptureAction::new(Arc::clone(&self.api));
        if let Some(provider) = &self.credit_card_provider {
            capture = capture.with_credit_card_provider(Arc::clone(provider));
        }
        let mut offsite_capture = OffsiteCaptureAction::new(Arc::clone(&self.api));
        if let Some(token_factory) = &self.token_factory {
            offsite_capture = offsite_capture.with_token_factory(Arc::clone(token_factory));
        }

        self.actions = vec![
            Arc::new(capture),
            Arc::new(offsite_capture),
            Arc::new(NotifyAction::new(Arc::clone(&self.api))),
            Arc::new(ConvertPaymentAction::new(Arc::clone(&self.currency_lookup))),
            Arc::new(StatusAction),
        ];
        self.follow_ups = vec![Arc::new(PurchaseStatusAction::new(Arc::clone(&self.api)))];
    }

    /// Execute the request with the first action supporting it.
    #[instrument(skip_all, fields(request = request.name(), gateway = self.api.name()))]
    pub fn execute(
        &self,
        request: &mut PaymentRequest,
    ) -> CustomResult<ActionOutcome, BridgeError> {
        let action = self
            .actions
            .iter()
            .find(|action| action.supports(request))
            .ok_or_else(|| {
                report!(BridgeError::RequestNotSupported { action: "bridge" })
                    .attach_printable(format!("request: {}", request.name()))
            })?;

        logger::debug!(action = action.name(), "executing action");
        let outcome = action.execute(request)?;
        if outcome.is_interrupt() {
            logger::info!(action = action.name(), ?outcome, "action interrupted the request");
            return Ok(outcome);
        }

        for follow_up in self.follow_ups.iter() {
            if !follow_up.supports(request) {
                continue;
            }
            logger::debug!(action = follow_up.name(), "executing follow-up action");
            let outcome = follow_up.execute(request)?;
            if outcome.is_interrupt() {
                return Ok(outcome);
            }
        }

        Ok(outcome)
    }

    /// Classify the details through a status request, handing the record back.
    pub fn status(&self, details: Details) -> CustomResult<(Status, Details), BridgeError> {
        let mut request = PaymentRequest::from(GetStatus::new(details));
        self.execute(&mut request)?;

        match request {
            PaymentRequest::GetStatus(get_status) => {
                Ok((get_status.status(), get_status.into_details()))
            }
            PaymentRequest::Capture(_) | PaymentRequest::Notify(_) | PaymentRequest::Convert(_) => {
                Err(report!(BridgeError::RequestNotSupported { action: "status" }))
            }
        }
    }
}
