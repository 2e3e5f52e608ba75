//! Keys of the payment details record.

/// Status marker written once the outcome of the payment is known.
pub const STATUS: &str = "_status";
/// Scalar response data of the gateway.
pub const DATA: &str = "_data";
/// Set once the purchase redirected the customer and a completion call is due.
pub const COMPLETE_CAPTURE_REQUIRED: &str = "_completeCaptureRequired";
/// Set once the completion call went through.
pub const CAPTURE_COMPLETED: &str = "_captureCompleted";

/// Prefix of keys which are bookkeeping of the bridge and never reach the gateway.
pub const CONTROL_KEY_PREFIX: char = '_';

pub const CARD: &str = "card";
pub const CARD_REFERENCE: &str = "cardReference";
pub const RETURN_URL: &str = "returnUrl";
pub const CANCEL_URL: &str = "cancelUrl";
pub const NOTIFY_URL: &str = "notifyUrl";
pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";
pub const DESCRIPTION: &str = "description";
pub const CLIENT_ID: &str = "clientId";
pub const CLIENT_EMAIL: &str = "clientEmail";
/// Outcome flag merged from the response of a direct purchase.
pub const SUCCESS: &str = "success";

/// Keys of the card structure handed to the gateway.
pub mod card {
    pub const NUMBER: &str = "number";
    pub const CVV: &str = "cvv";
    pub const EXPIRY_MONTH: &str = "expiryMonth";
    pub const EXPIRY_YEAR: &str = "expiryYear";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
}
