//! Gateway bridge: factory, dispatcher and the built-in gateway implementations.

pub mod bridge;
pub mod configs;
pub mod currency;
pub mod factory;
pub mod gateways;

pub use self::{
    bridge::BridgeGateway,
    configs::Settings,
    factory::{GatewayConfig, GatewayFactory},
};
