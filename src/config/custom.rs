use super::{Configuration, FieldValue};
use crate::error::FlowError;
use std::collections::BTreeMap;

/// A configuration kind this crate does not know about.
///
/// It is encoded with the same generic rule as the built-in kinds: the kind
/// tag under `"type"` and one entry per declared field.
///
/// ```rust
/// use dataflow_canon::config::CustomConfig;
/// use dataflow_canon::encoder::encode_config;
///
/// let config = CustomConfig::new("SessionWindowConfig")
///     .require("gap")
///     .with_field("gap", chrono::Duration::seconds(30));
///
/// let encoded = encode_config(&config).unwrap();
/// assert_eq!(encoded["gap"], "0:00:30");
/// assert_eq!(encoded["type"], "SessionWindowConfig");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomConfig {
    kind: String,
    fields: BTreeMap<String, FieldValue>,
    required: Vec<String>,
}

impl CustomConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Declares a field that must be present for this kind.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

impl Configuration for CustomConfig {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect()
    }

    fn check(&self) -> Result<(), FlowError> {
        if self.kind.is_empty() || self.fields.contains_key("type") {
            return Err(FlowError::malformed(self.kind.as_str(), "type"));
        }
        match self
            .required
            .iter()
            .find(|name| !self.fields.contains_key(name.as_str()))
        {
            Some(missing) => Err(FlowError::malformed(self.kind.as_str(), missing.as_str())),
            None => Ok(()),
        }
    }
}
