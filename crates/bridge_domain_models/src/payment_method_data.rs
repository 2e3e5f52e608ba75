use common_utils::errors::{CustomResult, ValidationError};
use error_stack::report;
use masking::{PeekInterface, Secret, SensitiveValue, StrongSecret};
use serde_json::Value;
use time::Date;

use crate::{
    consts::{self, card},
    details::Details,
};

/// Credit card as handed over by the customer or by a card vault.
///
/// Either the raw card (number, security code, expiry date and holder) or a token is present.
#[derive(Debug, Clone, Default)]
pub struct CardData {
    pub number: Option<StrongSecret<String>>,
    pub security_code: Option<StrongSecret<String>>,
    pub expire_at: Option<Date>,
    pub holder: Option<Secret<String>>,
    pub token: Option<String>,
}

/// Card representation understood by the gateway.
#[derive(Debug)]
pub enum CardDetails {
    /// Token of a card stored on the gateway side.
    Reference(String),
    /// Raw card structure, readable once.
    Card(SensitiveValue<Value>),
}

impl CardData {
    pub fn tokenized(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Gateway representation of the card.
    ///
    /// A tokenized card yields a reference; otherwise every raw field is required. The expiry
    /// month and year are rendered as two digits, the whole holder name goes to `firstName`.
    pub fn to_card_details(&self) -> CustomResult<CardDetails, ValidationError> {
        if let Some(token) = self.token.as_ref().filter(|token| !token.is_empty()) {
            return Ok(CardDetails::Reference(token.clone()));
        }

        let number = required(self.number.as_ref().map(PeekInterface::peek), "number")?;
        let cvv = required(
            self.security_code.as_ref().map(PeekInterface::peek),
            "security_code",
        )?;
        let holder = required(self.holder.as_ref().map(PeekInterface::peek), "holder")?;
        let expire_at = self
            .expire_at
            .ok_or_else(|| missing_field("expire_at"))?;

        let mut structure = serde_json::Map::new();
        structure.insert(card::NUMBER.to_owned(), Value::from(number.as_str()));
        structure.insert(card::CVV.to_owned(), Value::from(cvv.as_str()));
        structure.insert(
            card::EXPIRY_MONTH.to_owned(),
            Value::from(format!("{:02}", u8::from(expire_at.month()))),
        );
        structure.insert(
            card::EXPIRY_YEAR.to_owned(),
            Value::from(format!("{:02}", expire_at.year().rem_euclid(100))),
        );
        structure.insert(card::FIRST_NAME.to_owned(), Value::from(holder.as_str()));
        structure.insert(card::LAST_NAME.to_owned(), Value::from(""));

        Ok(CardDetails::Card(SensitiveValue::new(Value::Object(
            structure,
        ))))
    }
}

impl CardDetails {
    /// Store into the record under `cardReference` or `card`, unless that key is already set.
    pub fn store_into(self, details: &mut Details) -> bool {
        match self {
            Self::Reference(token) => details.insert_if_absent(consts::CARD_REFERENCE, token),
            Self::Card(card) => details.insert_if_absent(consts::CARD, card),
        }
    }
}

fn required<'a>(
    value: Option<&'a String>,
    field_name: &str,
) -> CustomResult<&'a String, ValidationError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| missing_field(field_name))
}

fn missing_field(field_name: &str) -> error_stack::Report<ValidationError> {
    report!(ValidationError::MissingRequiredField {
        field_name: field_name.to_owned(),
    })
}
