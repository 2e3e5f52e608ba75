//! Gateways shipped with the bridge.

pub mod dummy;

pub use dummy::DummyGateway;
