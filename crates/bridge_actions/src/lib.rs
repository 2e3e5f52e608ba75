//! Actions of the gateway bridge.

pub mod capture;
pub mod convert_payment;
mod helpers;
pub mod notify;
pub mod offsite_capture;
pub mod purchase_status;
pub mod status;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::{
    capture::CaptureAction, convert_payment::ConvertPaymentAction, notify::NotifyAction,
    offsite_capture::OffsiteCaptureAction, purchase_status::PurchaseStatusAction,
    status::StatusAction,
};
