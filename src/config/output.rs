use super::{Configuration, FieldValue};
use crate::behavior::Behavior;
use std::collections::BTreeMap;

/// Hands each item to a caller-supplied writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualOutputConfig {
    pub output_builder: Behavior,
}

impl ManualOutputConfig {
    pub fn new(output_builder: Behavior) -> Self {
        Self { output_builder }
    }
}

impl Configuration for ManualOutputConfig {
    fn kind(&self) -> &str {
        "ManualOutputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![("output_builder", self.output_builder.clone().into())]
    }
}

/// Like `ManualOutputConfig`, but the writer also receives the epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEpochOutputConfig {
    pub output_builder: Behavior,
}

impl ManualEpochOutputConfig {
    pub fn new(output_builder: Behavior) -> Self {
        Self { output_builder }
    }
}

impl Configuration for ManualEpochOutputConfig {
    fn kind(&self) -> &str {
        "ManualEpochOutputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![("output_builder", self.output_builder.clone().into())]
    }
}

/// Prints every item to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StdOutputConfig;

impl Configuration for StdOutputConfig {
    fn kind(&self) -> &str {
        "StdOutputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        Vec::new()
    }
}

/// Produces to a Kafka topic.
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaOutputConfig {
    pub brokers: Vec<String>,
    pub topic: String,
    pub additional_properties: Option<BTreeMap<String, String>>,
}

impl KafkaOutputConfig {
    pub fn new(brokers: Vec<String>, topic: impl Into<String>) -> Self {
        Self {
            brokers,
            topic: topic.into(),
            additional_properties: None,
        }
    }

    pub fn additional_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.additional_properties = Some(properties);
        self
    }
}

impl Configuration for KafkaOutputConfig {
    fn kind(&self) -> &str {
        "KafkaOutputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![
            ("brokers", self.brokers.clone().into()),
            ("topic", self.topic.clone().into()),
            (
                "additional_properties",
                self.additional_properties.clone().into(),
            ),
        ]
    }
}

config_family! {
    /// Where a dataflow's items end up.
    OutputConfig {
        Manual(ManualOutputConfig),
        ManualEpoch(ManualEpochOutputConfig),
        Std(StdOutputConfig),
        Kafka(KafkaOutputConfig),
    }
}
