//! Creation of bridge gateways from configuration.

use std::{collections::HashMap, sync::Arc};

use bridge_interfaces::{api::PaymentGateway, errors::BridgeError};
use common_utils::errors::CustomResult;
use error_stack::report;
use router_env::{instrument, logger, tracing};
use serde::Deserialize;

use crate::{
    bridge::BridgeGateway,
    gateways::{dummy, DummyGateway},
};

/// Configuration of a single gateway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Registered gateway type, e.g. `Dummy`.
    #[serde(rename = "type")]
    pub gateway_type: Option<String>,
    pub test_mode: bool,
    /// Gateway specific options, handed to its constructor untouched.
    pub options: serde_json::Map<String, serde_json::Value>,
    /// Ready made gateway client; `gateway_type` is ignored when set.
    #[serde(skip)]
    pub api: Option<Arc<dyn PaymentGateway>>,
}

impl GatewayConfig {
    pub fn with_type(gateway_type: impl Into<String>) -> Self {
        Self {
            gateway_type: Some(gateway_type.into()),
            ..Default::default()
        }
    }

    pub fn with_api(api: Arc<dyn PaymentGateway>) -> Self {
        Self {
            api: Some(api),
            ..Default::default()
        }
    }
}

/// Builds a gateway client out of its configuration.
pub type GatewayConstructor =
    fn(&GatewayConfig) -> CustomResult<Arc<dyn PaymentGateway>, BridgeError>;

#[derive(Debug, Clone)]
pub struct GatewayFactory {
    constructors: HashMap<String, GatewayConstructor>,
}

impl Default for GatewayFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayFactory {
    /// Factory knowing the built-in gateway types.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
        .register(dummy::DUMMY, create_dummy)
    }

    pub fn register(mut self, gateway_type: impl Into<String>, constructor: GatewayConstructor) -> Self {
        self.constructors.insert(gateway_type.into(), constructor);
        self
    }

    pub fn supported_types(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.constructors.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Default configuration, to be completed with a gateway type.
    pub fn create_config(&self) -> GatewayConfig {
        GatewayConfig {
            test_mode: true,
            ..Default::default()
        }
    }

    #[instrument(skip_all, fields(gateway_type = ?config.gateway_type))]
    pub fn create(&self, config: &GatewayConfig) -> CustomResult<BridgeGateway, BridgeError> {
        let api = match &config.api {
            Some(api) => Arc::clone(api),
            None => self.create_api(config)?,
        };
        logger::info!(gateway = api.name(), "created bridge gateway");

        Ok(BridgeGateway::new(api))
    }

    fn create_api(&self, config: &GatewayConfig) -> CustomResult<Arc<dyn PaymentGateway>, BridgeError> {
        let gateway_type = config
            .gateway_type
            .as_deref()
            .filter(|gateway_type| !gateway_type.is_empty())
            .ok_or_else(|| report!(BridgeError::MissingGatewayType))?;

        let constructor = self.constructors.get(gateway_type).ok_or_else(|| {
            report!(BridgeError::UnsupportedGatewayType {
                gateway_type: gateway_type.to_string(),
            })
            .attach_printable(format!("supported types: {:?}", self.supported_types()))
        })?;

        constructor(config)
    }
}

fn create_dummy(config: &GatewayConfig) -> CustomResult<Arc<dyn PaymentGateway>, BridgeError> {
    Ok(Arc::new(
        DummyGateway::new(config.test_mode).with_defaults(config.options.clone()),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn creates_registered_type() {
        let gateway = GatewayFactory::new()
            .create(&GatewayConfig::with_type("Dummy"))
            .unwrap();

        assert_eq!(gateway.api().name(), "Dummy");
        assert!(!gateway.action_names().is_empty());
    }

    #[test]
    fn uses_explicit_api() {
        let gateway = GatewayFactory::new()
            .create(&GatewayConfig {
                gateway_type: Some("Invalid".to_string()),
                ..GatewayConfig::with_api(Arc::new(DummyGateway::new(true)))
            })
            .unwrap();

        assert_eq!(gateway.api().name(), "Dummy");
    }

    #[test]
    fn requires_type() {
        let error = GatewayFactory::new()
            .create(&GatewayConfig::default())
            .err()
            .unwrap();

        assert_eq!(error.current_context(), &BridgeError::MissingGatewayType);
        assert_eq!(
            error.current_context().to_string(),
            "The type fields are required."
        );
    }

    #[test]
    fn rejects_unknown_type() {
        let error = GatewayFactory::new()
            .create(&GatewayConfig::with_type("Invalid"))
            .err()
            .unwrap();

        assert_eq!(
            error.current_context().to_string(),
            "Given gateway type Invalid or class is not supported."
        );
    }

    #[test]
    fn registered_constructor_is_used() {
        fn create_named(
            config: &GatewayConfig,
        ) -> CustomResult<Arc<dyn PaymentGateway>, BridgeError> {
            Ok(Arc::new(DummyGateway::new(config.test_mode)))
        }

        let factory = GatewayFactory::new().register("Custom", create_named);

        assert_eq!(factory.supported_types(), vec!["Custom", "Dummy"]);
        assert!(factory.create(&GatewayConfig::with_type("Custom")).is_ok());
    }

    #[test]
    fn default_config_is_in_test_mode() {
        let config = GatewayFactory::new().create_config();

        assert!(config.test_mode);
        assert!(config.gateway_type.is_none());
    }

    #[test]
    fn deserializes_type_field() {
        let config: GatewayConfig = serde_json::from_value(serde_json::json!({
            "type": "Dummy",
            "test_mode": true,
            "options": { "username": "theUser" },
        }))
        .unwrap();

        assert_eq!(config.gateway_type.as_deref(), Some("Dummy"));
        assert!(config.test_mode);
        assert_eq!(config.options.get("username"), Some(&serde_json::Value::from("theUser")));
    }
}
