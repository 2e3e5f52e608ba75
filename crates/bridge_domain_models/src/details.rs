//! Mutable payment record shared by the bridge actions.

use std::collections::BTreeMap;

use masking::SensitiveValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts;

/// Arguments of a gateway call.
pub type GatewayParameters = serde_json::Map<String, Value>;

/// Single entry of a [`Details`] record.
#[derive(Debug, PartialEq)]
pub enum DetailValue {
    Plain(Value),
    /// Card payload which is handed to the gateway exactly once.
    Sensitive(SensitiveValue<Value>),
}

impl DetailValue {
    pub fn as_plain(&self) -> Option<&Value> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Sensitive(_) => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Self::Plain(Value::Null))
    }
}

impl From<Value> for DetailValue {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

impl From<SensitiveValue<Value>> for DetailValue {
    fn from(value: SensitiveValue<Value>) -> Self {
        Self::Sensitive(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        Self::Plain(Value::String(value.to_owned()))
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        Self::Plain(Value::String(value))
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        Self::Plain(Value::Bool(value))
    }
}

impl Serialize for DetailValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Plain(value) => value.serialize(serializer),
            Self::Sensitive(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DetailValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::Plain)
    }
}

/// Payment details record.
///
/// Keys starting with `_` are bookkeeping of the bridge; they are never copied into gateway
/// parameters. A `null` entry counts as absent.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Details(BTreeMap<String, DetailValue>);

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn get_plain(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(DetailValue::as_plain)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_plain(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the entry is set to a truthy value: `true`, a non-zero number, a non-empty
    /// string other than `"0"` or a non-empty collection.
    pub fn flag(&self, key: &str) -> bool {
        self.get_plain(key).is_some_and(is_truthy)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DetailValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert unless an entry for `key` is already present. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<DetailValue>) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<DetailValue> {
        self.0.remove(key)
    }

    /// Overwrite entries with the given plain values.
    pub fn merge(&mut self, values: GatewayParameters) {
        for (key, value) in values {
            self.0.insert(key, DetailValue::Plain(value));
        }
    }

    /// Parameters of a gateway call: every entry except the bookkeeping ones.
    ///
    /// Sensitive entries are read here and are left erased in the record.
    pub fn to_gateway_parameters(&mut self) -> GatewayParameters {
        self.0
            .iter_mut()
            .filter(|(key, _)| !key.starts_with(consts::CONTROL_KEY_PREFIX))
            .map(|(key, value)| {
                let value = match value {
                    DetailValue::Plain(value) => value.clone(),
                    DetailValue::Sensitive(value) => value.peek().unwrap_or(Value::Null),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// Plain view of the record, sensitive entries rendered as `null`.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.as_plain().cloned().unwrap_or_default()))
                .collect(),
        )
    }
}

impl From<GatewayParameters> for Details {
    fn from(values: GatewayParameters) -> Self {
        values.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Details
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
