use crate::behavior::Behavior;
use crate::config::{self, ClockConfig, Configuration, InputConfig, OutputConfig, WindowConfig};
use crate::error::FlowError;

/// One stage of a dataflow: an optional `step_id` plus its kind-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub step_id: Option<String>,
    pub kind: StepKind,
}

/// Every step kind with exactly the fields that kind owns.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    Input {
        input_config: InputConfig,
    },
    Map {
        mapper: Behavior,
    },
    FilterMap {
        mapper: Behavior,
    },
    Filter {
        predicate: Behavior,
    },
    FlatMap {
        mapper: Behavior,
    },
    Inspect {
        inspector: Behavior,
    },
    InspectEpoch {
        inspector: Behavior,
    },
    Reduce {
        reducer: Behavior,
        is_complete: Behavior,
    },
    ReduceWindow {
        clock_config: ClockConfig,
        window_config: WindowConfig,
        reducer: Behavior,
    },
    StatefulMap {
        builder: Behavior,
        mapper: Behavior,
    },
    FoldWindow {
        clock_config: ClockConfig,
        window_config: WindowConfig,
        builder: Behavior,
        folder: Behavior,
    },
    CollectWindow {
        clock_config: ClockConfig,
        window_config: WindowConfig,
    },
    Output {
        output_config: OutputConfig,
    },
}

/// A borrowed view of one kind-specific field.
#[derive(Debug, Clone, Copy)]
pub enum StepField<'a> {
    Behavior(&'a Behavior),
    Config(&'a dyn Configuration),
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self {
            step_id: None,
            kind,
        }
    }

    pub fn with_step_id(mut self, step_id: impl Into<String>) -> Self {
        self.step_id = Some(step_id.into());
        self
    }

    pub fn step_id(&self) -> Option<&str> {
        self.step_id.as_deref()
    }

    pub fn kind(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn fields(&self) -> Vec<(&'static str, StepField<'_>)> {
        self.kind.fields()
    }

    /// Verifies every behavior and configuration the step carries.
    pub fn validate(&self) -> Result<(), FlowError> {
        self.fields()
            .into_iter()
            .try_for_each(|(_, field)| match field {
                StepField::Behavior(behavior) => behavior.name().map(drop),
                StepField::Config(configuration) => config::validate(configuration),
            })
    }
}

impl From<StepKind> for Step {
    fn from(kind: StepKind) -> Self {
        Step::new(kind)
    }
}

impl StepKind {
    /// The kind tag used under `"type"` in the encoded document.
    pub fn tag(&self) -> &'static str {
        match self {
            StepKind::Input { .. } => "Input",
            StepKind::Map { .. } => "Map",
            StepKind::FilterMap { .. } => "FilterMap",
            StepKind::Filter { .. } => "Filter",
            StepKind::FlatMap { .. } => "FlatMap",
            StepKind::Inspect { .. } => "Inspect",
            StepKind::InspectEpoch { .. } => "InspectEpoch",
            StepKind::Reduce { .. } => "Reduce",
            StepKind::ReduceWindow { .. } => "ReduceWindow",
            StepKind::StatefulMap { .. } => "StatefulMap",
            StepKind::FoldWindow { .. } => "FoldWindow",
            StepKind::CollectWindow { .. } => "CollectWindow",
            StepKind::Output { .. } => "Output",
        }
    }

    /// The kind-specific fields, named as they appear in the document.
    pub fn fields(&self) -> Vec<(&'static str, StepField<'_>)> {
        use StepField::{Behavior as B, Config as C};

        match self {
            StepKind::Input { input_config } => vec![("input_config", C(input_config))],
            StepKind::Map { mapper }
            | StepKind::FilterMap { mapper }
            | StepKind::FlatMap { mapper } => vec![("mapper", B(mapper))],
            StepKind::Filter { predicate } => vec![("predicate", B(predicate))],
            StepKind::Inspect { inspector } | StepKind::InspectEpoch { inspector } => {
                vec![("inspector", B(inspector))]
            }
            StepKind::Reduce {
                reducer,
                is_complete,
            } => vec![("reducer", B(reducer)), ("is_complete", B(is_complete))],
            StepKind::ReduceWindow {
                clock_config,
                window_config,
                reducer,
            } => vec![
                ("clock_config", C(clock_config)),
                ("window_config", C(window_config)),
                ("reducer", B(reducer)),
            ],
            StepKind::StatefulMap { builder, mapper } => {
                vec![("builder", B(builder)), ("mapper", B(mapper))]
            }
            StepKind::FoldWindow {
                clock_config,
                window_config,
                builder,
                folder,
            } => vec![
                ("clock_config", C(clock_config)),
                ("window_config", C(window_config)),
                ("builder", B(builder)),
                ("folder", B(folder)),
            ],
            StepKind::CollectWindow {
                clock_config,
                window_config,
            } => vec![
                ("clock_config", C(clock_config)),
                ("window_config", C(window_config)),
            ],
            StepKind::Output { output_config } => vec![("output_config", C(output_config))],
        }
    }
}
