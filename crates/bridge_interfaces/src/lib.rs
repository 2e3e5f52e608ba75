//! Interfaces between the bridge actions, the wrapped gateways and their collaborators.

pub mod api;
pub mod errors;
