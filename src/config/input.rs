use super::{Configuration, FieldValue};
use crate::behavior::Behavior;
use std::collections::BTreeMap;

/// Reads items produced by a caller-supplied builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualInputConfig {
    pub input_builder: Behavior,
}

impl ManualInputConfig {
    pub fn new(input_builder: Behavior) -> Self {
        Self { input_builder }
    }
}

impl Configuration for ManualInputConfig {
    fn kind(&self) -> &str {
        "ManualInputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![("input_builder", self.input_builder.clone().into())]
    }
}

/// Consumes a Kafka topic.
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaInputConfig {
    pub brokers: Vec<String>,
    pub topic: String,
    /// Keep waiting for new messages once the end of the topic is reached.
    pub tail: bool,
    /// `"beginning"` or `"end"`.
    pub starting_offset: String,
    pub additional_properties: Option<BTreeMap<String, String>>,
}

impl KafkaInputConfig {
    pub fn new(brokers: Vec<String>, topic: impl Into<String>) -> Self {
        Self {
            brokers,
            topic: topic.into(),
            tail: true,
            starting_offset: "beginning".to_owned(),
            additional_properties: None,
        }
    }

    pub fn tail(mut self, tail: bool) -> Self {
        self.tail = tail;
        self
    }

    pub fn starting_offset(mut self, offset: impl Into<String>) -> Self {
        self.starting_offset = offset.into();
        self
    }

    pub fn additional_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.additional_properties = Some(properties);
        self
    }
}

impl Configuration for KafkaInputConfig {
    fn kind(&self) -> &str {
        "KafkaInputConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![
            ("brokers", self.brokers.clone().into()),
            ("topic", self.topic.clone().into()),
            ("tail", self.tail.into()),
            ("starting_offset", self.starting_offset.clone().into()),
            (
                "additional_properties",
                self.additional_properties.clone().into(),
            ),
        ]
    }
}

config_family! {
    /// Where a dataflow's items come from.
    InputConfig {
        Manual(ManualInputConfig),
        Kafka(KafkaInputConfig),
    }
}
