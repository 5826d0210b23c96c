use thiserror::Error;

/// Errors raised while building or encoding a dataflow.
///
/// Both variants are construction mistakes made by the pipeline author. They
/// are never transient, so nothing in this crate retries after one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(
        "Behavior reference '{descriptor}' is not a named function, an anonymous function or a bound method"
    )]
    UnsupportedReferenceKind { descriptor: String },

    #[error("Configuration '{kind}' is malformed: field '{field}' is missing or invalid")]
    MalformedConfiguration { kind: String, field: String },
}

impl FlowError {
    pub(crate) fn unsupported(descriptor: impl Into<String>) -> Self {
        FlowError::UnsupportedReferenceKind {
            descriptor: descriptor.into(),
        }
    }

    pub(crate) fn malformed(kind: impl Into<String>, field: impl Into<String>) -> Self {
        FlowError::MalformedConfiguration {
            kind: kind.into(),
            field: field.into(),
        }
    }
}

/// Errors that can occur when turning a dataflow into text.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Encode(#[from] FlowError),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}
