//! The dataflow graph: an ordered list of typed steps.

mod display;
mod graph;
mod step;

pub use graph::Dataflow;
pub use step::{Step, StepField, StepKind};
