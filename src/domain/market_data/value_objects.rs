use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::DomainError;

/// Value Object - tradeable instrument identifier (`EURUSD`, `GBPJPY`, ...)
///
/// Always non-empty and trimmed, including when decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(String);

impl Pair {
    pub fn new(pair: String) -> Result<Self, DomainError> {
        let trimmed = pair.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPair("Pair cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Pair {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Pair {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.0
    }
}

/// Value Object - directional recommendation.
///
/// Unknown wire values decode as `Wait`, which renders with neutral styling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(from = "String")]
pub enum SignalKind {
    #[strum(serialize = "BUY", ascii_case_insensitive)]
    #[serde(rename = "BUY")]
    Buy,

    #[strum(serialize = "SELL", ascii_case_insensitive)]
    #[serde(rename = "SELL")]
    Sell,

    #[default]
    #[strum(serialize = "WAIT", ascii_case_insensitive)]
    #[serde(rename = "WAIT")]
    Wait,
}

impl SignalKind {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Wait)
    }
}

impl From<String> for SignalKind {
    fn from(value: String) -> Self {
        SignalKind::from_str(value.trim()).unwrap_or_default()
    }
}

/// Value Object - point in time as sent by the backend.
///
/// The backend emits either ISO-8601 strings or epoch milliseconds depending
/// on the endpoint, so both are accepted and kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(f64),
    Text(String),
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Text(String::new())
    }
}

impl Timestamp {
    pub fn from_millis(value: f64) -> Self {
        Timestamp::Millis(value)
    }

    /// Epoch milliseconds when known without parsing.
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Timestamp::Millis(ms) => Some(*ms),
            Timestamp::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Timestamp::Text(text) if text.trim().is_empty())
    }

    /// Raw textual form, used when the browser cannot parse the value.
    pub fn raw(&self) -> String {
        match self {
            Timestamp::Millis(ms) => ms.to_string(),
            Timestamp::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
