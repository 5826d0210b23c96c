use super::{Step, StepKind};
use crate::behavior::Behavior;
use crate::config::{ClockConfig, InputConfig, OutputConfig, WindowConfig};
use crate::error::FlowError;
use tracing::warn;

/// An ordered, append-only sequence of steps.
///
/// Step order is evaluation order. Every builder method checks the step it
/// is about to append, so a graph built through this API always encodes.
/// The methods return `&mut Self` on success and chain with `?`:
///
/// ```rust
/// use dataflow_canon::prelude::*;
///
/// fn stringify(x: i64) -> String { x.to_string() }
///
/// # fn main() -> Result<()> {
/// let mut flow = Dataflow::new();
/// flow.input("inp", ManualInputConfig::new(behavior!(|| 0..10)))?
///     .map(Behavior::of(&stringify))?
///     .output("out", StdOutputConfig)?;
/// assert_eq!(flow.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataflow {
    name: Option<String>,
    steps: Vec<Step>,
}

impl Dataflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dataflow with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends a pre-built step after checking its behaviors and configurations.
    /// On error the graph is left untouched.
    pub fn push(&mut self, step: impl Into<Step>) -> Result<&mut Self, FlowError> {
        let step = step.into();
        if let Err(err) = step.validate() {
            warn!(
                kind = step.kind(),
                step_id = step.step_id().unwrap_or_default(),
                error = %err,
                "rejected step"
            );
            return Err(err);
        }
        self.steps.push(step);
        Ok(self)
    }

    fn push_with_id(
        &mut self,
        step_id: impl Into<String>,
        kind: StepKind,
    ) -> Result<&mut Self, FlowError> {
        self.push(Step::new(kind).with_step_id(step_id))
    }

    /// Adds an input source.
    pub fn input(
        &mut self,
        step_id: impl Into<String>,
        input_config: impl Into<InputConfig>,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::Input {
                input_config: input_config.into(),
            },
        )
    }

    /// Transforms every item one to one.
    pub fn map(&mut self, mapper: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::Map { mapper })
    }

    /// Transforms every item, dropping those the mapper maps to nothing.
    pub fn filter_map(&mut self, mapper: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::FilterMap { mapper })
    }

    /// Keeps only the items the predicate accepts.
    pub fn filter(&mut self, predicate: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::Filter { predicate })
    }

    /// Transforms every item one to many.
    pub fn flat_map(&mut self, mapper: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::FlatMap { mapper })
    }

    /// Observes every item without changing it.
    pub fn inspect(&mut self, inspector: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::Inspect { inspector })
    }

    /// Observes every item together with its epoch.
    pub fn inspect_epoch(&mut self, inspector: Behavior) -> Result<&mut Self, FlowError> {
        self.push(StepKind::InspectEpoch { inspector })
    }

    /// Combines items per key until `is_complete` says the value is done.
    pub fn reduce(
        &mut self,
        step_id: impl Into<String>,
        reducer: Behavior,
        is_complete: Behavior,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::Reduce {
                reducer,
                is_complete,
            },
        )
    }

    /// Combines items per key and window.
    pub fn reduce_window(
        &mut self,
        step_id: impl Into<String>,
        clock_config: impl Into<ClockConfig>,
        window_config: impl Into<WindowConfig>,
        reducer: Behavior,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::ReduceWindow {
                clock_config: clock_config.into(),
                window_config: window_config.into(),
                reducer,
            },
        )
    }

    /// Maps items per key through state created by `builder`.
    pub fn stateful_map(
        &mut self,
        step_id: impl Into<String>,
        builder: Behavior,
        mapper: Behavior,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(step_id, StepKind::StatefulMap { builder, mapper })
    }

    /// Folds items per key and window into an accumulator created by `builder`.
    pub fn fold_window(
        &mut self,
        step_id: impl Into<String>,
        clock_config: impl Into<ClockConfig>,
        window_config: impl Into<WindowConfig>,
        builder: Behavior,
        folder: Behavior,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::FoldWindow {
                clock_config: clock_config.into(),
                window_config: window_config.into(),
                builder,
                folder,
            },
        )
    }

    /// Collects items per key and window into a list.
    pub fn collect_window(
        &mut self,
        step_id: impl Into<String>,
        clock_config: impl Into<ClockConfig>,
        window_config: impl Into<WindowConfig>,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::CollectWindow {
                clock_config: clock_config.into(),
                window_config: window_config.into(),
            },
        )
    }

    /// Adds an output sink.
    pub fn output(
        &mut self,
        step_id: impl Into<String>,
        output_config: impl Into<OutputConfig>,
    ) -> Result<&mut Self, FlowError> {
        self.push_with_id(
            step_id,
            StepKind::Output {
                output_config: output_config.into(),
            },
        )
    }
}

/// Assembles a dataflow directly from steps, in iteration order.
///
/// Unlike the builder methods this performs no checks; a bad reference
/// surfaces as an error when the graph is encoded.
impl FromIterator<Step> for Dataflow {
    fn from_iter<I: IntoIterator<Item = Step>>(steps: I) -> Self {
        Self {
            name: None,
            steps: steps.into_iter().collect(),
        }
    }
}
