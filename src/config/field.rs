use super::{CustomConfig, validate};
use crate::behavior::Behavior;
use crate::error::FlowError;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// A typed configuration field value.
///
/// Durations and timestamps stay typed here; they are only turned into text
/// by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Duration(Duration),
    Timestamp(DateTime<Utc>),
    Behavior(Behavior),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
    Config(Box<CustomConfig>),
}

impl FieldValue {
    /// Verifies every behavior reference and nested configuration.
    pub(crate) fn validate(&self) -> Result<(), FlowError> {
        match self {
            FieldValue::Behavior(behavior) => behavior.name().map(drop),
            FieldValue::List(items) => items.iter().try_for_each(FieldValue::validate),
            FieldValue::Map(entries) => entries.values().try_for_each(FieldValue::validate),
            FieldValue::Config(config) => validate(&**config),
            FieldValue::Null
            | FieldValue::Bool(_)
            | FieldValue::Int(_)
            | FieldValue::Str(_)
            | FieldValue::Duration(_)
            | FieldValue::Timestamp(_) => Ok(()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<Duration> for FieldValue {
    fn from(value: Duration) -> Self {
        FieldValue::Duration(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<Behavior> for FieldValue {
    fn from(value: Behavior) -> Self {
        FieldValue::Behavior(value)
    }
}

impl From<CustomConfig> for FieldValue {
    fn from(value: CustomConfig) -> Self {
        FieldValue::Config(Box::new(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<BTreeMap<String, T>> for FieldValue {
    fn from(entries: BTreeMap<String, T>) -> Self {
        FieldValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
