use serde::{Deserialize, Serialize};

/// Status of a payment, derived from its details record.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Nothing was submitted to the gateway yet.
    #[default]
    New,
    /// A status marker exists but is not one the bridge recognizes.
    Unknown,
    Pending,
    Captured,
    Failed,
}

impl Status {
    /// Statuses a handler may write into the `_status` marker of a details record.
    pub fn is_recorded_marker(self) -> bool {
        matches!(self, Self::Captured | Self::Failed)
    }
}

/// How a gateway completes a purchase.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GatewayKind {
    /// Card data is sent along with a single purchase call.
    Direct,
    /// The customer is redirected; a second call completes the purchase.
    Offsite,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RedirectMethod {
    #[default]
    Get,
    Post,
}
