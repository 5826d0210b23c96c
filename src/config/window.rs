use super::{Configuration, FieldValue};
use chrono::{DateTime, Duration, Utc};

/// Fixed-length, non-overlapping windows aligned to `start_at`.
///
/// Without `start_at` the runtime aligns windows to the time the dataflow
/// starts; the encoded document then carries `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct TumblingWindowConfig {
    pub length: Duration,
    pub start_at: Option<DateTime<Utc>>,
}

impl TumblingWindowConfig {
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            start_at: None,
        }
    }

    pub fn start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }
}

impl Configuration for TumblingWindowConfig {
    fn kind(&self) -> &str {
        "TumblingWindowConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![
            ("length", self.length.into()),
            ("start_at", self.start_at.into()),
        ]
    }
}

config_family! {
    /// How items are grouped into windows.
    WindowConfig {
        Tumbling(TumblingWindowConfig),
    }
}
