//! Prelude module for convenient imports
//!
//! Re-exports the types needed to build and encode a dataflow, so a pipeline
//! definition only needs `use dataflow_canon::prelude::*;`.
//!
//! # Example
//!
//! ```rust
//! use dataflow_canon::prelude::*;
//!
//! fn acc_values(mut acc: Vec<f64>, value: f64) -> Vec<f64> {
//!     acc.push(value);
//!     acc
//! }
//!
//! # fn run_example() -> Result<()> {
//! let start_at = Utc.with_ymd_and_hms(2005, 7, 14, 12, 30, 0).unwrap();
//! let mut flow = Dataflow::named("running_average");
//! flow.fold_window(
//!     "running_average",
//!     EventClockConfig::new(behavior!(|event| event), Duration::seconds(10)),
//!     TumblingWindowConfig::new(Duration::seconds(5)).start_at(start_at),
//!     behavior!(|| Vec::new()),
//!     Behavior::of(&acc_values),
//! )?;
//!
//! println!("{}", encode(&flow)?.render_with(RenderStyle::Pretty)?);
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::behavior::Behavior;
pub use crate::dataflow::{Dataflow, Step, StepKind};

// Configuration
pub use crate::config::{
    ClockConfig, Configuration, CustomConfig, EventClockConfig, FieldValue, InputConfig,
    KafkaInputConfig, KafkaOutputConfig, ManualEpochOutputConfig, ManualInputConfig,
    ManualOutputConfig, OutputConfig, StdOutputConfig, SystemClockConfig, TumblingWindowConfig,
    WindowConfig,
};

// Encoding
pub use crate::encoder::{Document, Encoder, RenderStyle, encode, encode_config, encode_step};

// Error types
pub use crate::error::{FlowError, RenderError};

// Macros
pub use crate::behavior;

// Time types used by window and clock configurations
pub use chrono::{DateTime, Duration, TimeZone, Utc};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
