//! What an action asks its caller to do once it returns.

use common_enums::RedirectMethod;

use crate::details::GatewayParameters;

/// Customer redirection requested by an offsite gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectForm {
    pub url: String,
    pub method: RedirectMethod,
    /// Form fields to post along, empty for `GET` redirects.
    pub data: GatewayParameters,
}

/// Result of a successful action execution.
///
/// `Respond` and `Redirect` are not failures: the caller stops processing the request and
/// answers the HTTP client directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Continue,
    Respond { status_code: u16 },
    Redirect(RedirectForm),
}

impl ActionOutcome {
    pub fn acknowledge() -> Self {
        Self::Respond { status_code: 200 }
    }

    pub fn is_interrupt(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}
