//! The canonical encoder.
//!
//! `encode` walks a `Dataflow` once, top to bottom, and produces a
//! [`Document`]: a tree whose every mapping has its keys sorted and whose
//! steps stay in append order. Two graphs built from the same steps in the
//! same order therefore render to byte-identical text, whatever order their
//! fields were filled in.
//!
//! ```rust
//! use dataflow_canon::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut flow = Dataflow::new();
//! flow.input("inp", ManualInputConfig::new(behavior!(|| vec![0, 1, 2])))?;
//!
//! assert_eq!(
//!     encode(&flow)?.render(),
//!     r#"{"steps":[{"input_config":{"input_builder":"<lambda>","type":"ManualInputConfig"},"step_id":"inp","type":"Input"}],"type":"Dataflow"}"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod format;
mod render;

pub use render::RenderStyle;

use crate::config::{Configuration, FieldValue};
use crate::dataflow::{Dataflow, Step, StepField};
use crate::error::{FlowError, RenderError};
use format::{format_duration, format_timestamp};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Kind tag of the document root.
pub const DATAFLOW_TYPE: &str = "Dataflow";

/// The encoded, key-sorted form of a dataflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compact canonical text.
    pub fn render(&self) -> String {
        self.0.to_string()
    }

    pub fn render_with(&self, style: RenderStyle) -> Result<String, RenderError> {
        render::render(&self.0, style)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encoder settings. `Encoder::default()` is what [`encode`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoder {
    include_name: bool,
}

/// Builder for [`Encoder`], started with `Encoder::builder()`.
#[derive(Debug, Clone, Copy)]
pub struct EncoderBuilder {
    include_name: bool,
}

impl EncoderBuilder {
    /// Whether a named dataflow carries its name under `"name"`. Off by
    /// default, so the document holds only `"steps"` and `"type"`.
    pub fn include_name(mut self, include_name: bool) -> Self {
        self.include_name = include_name;
        self
    }

    pub fn build(self) -> Encoder {
        Encoder {
            include_name: self.include_name,
        }
    }
}

impl Encoder {
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder {
            include_name: Encoder::default().include_name,
        }
    }

    /// Encodes the whole dataflow. Either every step encodes or the first
    /// error is returned; no partial document is ever produced.
    #[instrument(level = "trace", skip_all)]
    pub fn encode(&self, flow: &Dataflow) -> Result<Document, FlowError> {
        debug!(
            flow = flow.name().unwrap_or_default(),
            steps = flow.len(),
            "encoding dataflow"
        );

        let steps = flow
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| {
                trace!(
                    index,
                    kind = step.kind(),
                    step_id = step.step_id().unwrap_or_default(),
                    "encoding step"
                );
                encode_step(step)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = BTreeMap::new();
        if self.include_name {
            if let Some(name) = flow.name() {
                entries.insert("name", Value::String(name.to_owned()));
            }
        }
        entries.insert("steps", Value::Array(steps));
        entries.insert("type", Value::String(DATAFLOW_TYPE.to_owned()));
        Ok(Document(object(entries)))
    }
}

/// Encodes a dataflow with the default settings.
pub fn encode(flow: &Dataflow) -> Result<Document, FlowError> {
    Encoder::default().encode(flow)
}

/// Encodes one step: its kind tag, its `step_id` when present and every
/// kind-specific field.
pub fn encode_step(step: &Step) -> Result<Value, FlowError> {
    let mut entries = BTreeMap::new();
    entries.insert("type", Value::String(step.kind().to_owned()));
    if let Some(step_id) = step.step_id() {
        entries.insert("step_id", Value::String(step_id.to_owned()));
    }
    for (name, field) in step.fields() {
        let value = match field {
            StepField::Behavior(behavior) => Value::String(behavior.name()?.to_owned()),
            StepField::Config(config) => encode_config(config)?,
        };
        entries.insert(name, value);
    }
    Ok(object(entries))
}

/// Encodes any configuration kind, built-in or custom, by the same rule:
/// the kind tag under `"type"` plus one entry per declared field.
pub fn encode_config(config: &dyn Configuration) -> Result<Value, FlowError> {
    config.check()?;
    let fields = config.fields();
    let mut entries = BTreeMap::new();
    for (name, value) in &fields {
        entries.insert(*name, encode_field(value)?);
    }
    entries.insert("type", Value::String(config.kind().to_owned()));
    Ok(object(entries))
}

fn encode_field(value: &FieldValue) -> Result<Value, FlowError> {
    let encoded = match value {
        FieldValue::Null => Value::Null,
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Int(n) => Value::from(*n),
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::Duration(d) => Value::String(format_duration(d)),
        FieldValue::Timestamp(t) => Value::String(format_timestamp(t)),
        FieldValue::Behavior(behavior) => Value::String(behavior.name()?.to_owned()),
        FieldValue::List(items) => Value::Array(
            items
                .iter()
                .map(encode_field)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        FieldValue::Map(entries) => object(
            entries
                .iter()
                .map(|(key, entry)| Ok((key.as_str(), encode_field(entry)?)))
                .collect::<Result<BTreeMap<_, _>, FlowError>>()?,
        ),
        FieldValue::Config(config) => encode_config(&**config)?,
    };
    Ok(encoded)
}

/// Builds a JSON object from already-sorted entries. Insertion happens in
/// sorted order, so the result is sorted even if serde_json keeps insertion
/// order.
fn object(entries: BTreeMap<&str, Value>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect::<Map<String, Value>>(),
    )
}

/// Serializes as the encoded document, so a dataflow can be embedded in any
/// serde output.
impl Serialize for Dataflow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
