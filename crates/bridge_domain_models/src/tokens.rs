use serde::{Deserialize, Serialize};

/// Reference to the stored details record a token was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub class: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
        }
    }
}

/// Security token identifying a capture or notify endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub target_url: String,
    pub gateway_name: String,
    pub details: Option<Identity>,
}

impl Token {
    pub fn with_target_url(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Default::default()
        }
    }

    pub fn target_url(&self) -> Option<&str> {
        Some(self.target_url.as_str()).filter(|url| !url.is_empty())
    }
}
