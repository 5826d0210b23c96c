//! # Dataflow Canon - Dataflow Graph Model and Canonical Encoder
//!
//! **Dataflow Canon** describes stream-processing pipelines as plain data and
//! turns them into a deterministic, key-sorted document. It never runs a
//! pipeline. The document is meant for comparing two pipeline definitions,
//! snapshotting them in tests, and handing them to external tooling.
//!
//! ## Core Workflow
//!
//! 1.  **Reference Your Logic**: Wrap each function a step should call in a `Behavior`,
//!     either with `Behavior::of(&my_fn)` or the `behavior!` macro. Closures become
//!     `"<lambda>"`, methods are known by their own name.
//! 2.  **Build the Graph**: Append steps to a `Dataflow` through its builder methods
//!     (`input`, `map`, `fold_window`, `output`, ...). Every step is checked as it is added.
//! 3.  **Encode**: Call `encode` to obtain a `Document`. Every mapping in it has sorted keys
//!     while the steps keep their append order.
//! 4.  **Render**: Turn the document into text with `render` or `render_with`, choosing
//!     compact, pretty or Python-compatible spacing.
//!
//! ## Quick Start
//!
//! ```rust
//! use dataflow_canon::prelude::*;
//!
//! fn add_one(x: i64) -> i64 {
//!     x + 1
//! }
//!
//! fn main() -> Result<()> {
//!     let mut flow = Dataflow::new();
//!     flow.input("inp", ManualInputConfig::new(behavior!(|| 0..3)))?
//!         .map(Behavior::of(&add_one))?
//!         .output("out", StdOutputConfig)?;
//!
//!     let document = encode(&flow)?;
//!     assert_eq!(document.as_value()["steps"][1]["mapper"], "add_one");
//!
//!     println!("{}", flow);
//!     println!("{}", document.render_with(RenderStyle::Python)?);
//!     Ok(())
//! }
//! ```

pub mod behavior;
pub mod config;
pub mod dataflow;
pub mod encoder;
pub mod error;
pub mod prelude;

#[cfg(feature = "debug-tools")]
mod debug;

pub use behavior::Behavior;
pub use dataflow::{Dataflow, Step, StepKind};
pub use encoder::{Document, encode};
pub use error::{FlowError, RenderError};
