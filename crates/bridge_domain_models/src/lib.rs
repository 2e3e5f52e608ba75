pub mod consts;
pub mod currency;
pub mod details;
pub mod payment_method_data;
pub mod payments;
pub mod router_request_types;
pub mod router_response_types;
pub mod tokens;
