use common_utils::types::MinorUnit;

use crate::{details::GatewayParameters, payment_method_data::CardData};

/// Payment entity of the payment flow, before it is converted into a details record.
#[derive(Debug, Clone, Default)]
pub struct Payment {
    pub number: Option<String>,
    pub currency_code: String,
    pub total_amount: MinorUnit,
    pub description: Option<String>,
    pub client_id: Option<String>,
    pub client_email: Option<String>,
    pub credit_card: Option<CardData>,
    /// Details already attached to the payment; conversion never overwrites them.
    pub details: GatewayParameters,
}
