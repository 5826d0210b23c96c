use super::{Dataflow, Step, StepField};
use crate::config::{Configuration, FieldValue};
use crate::encoder::format::{format_duration, format_timestamp};
use itertools::{Itertools, Position};
use std::fmt;

/// Renders the dataflow as an indented tree, one step per branch.
///
/// This is a debugging view only; the canonical form is the encoded document.
impl fmt::Display for Dataflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => writeln!(f, "Dataflow '{}'", name)?,
            None => writeln!(f, "Dataflow")?,
        }
        for (position, step) in self.steps().iter().with_position() {
            fmt_step(f, step, is_final(position))?;
        }
        Ok(())
    }
}

fn is_final(position: Position) -> bool {
    matches!(position, Position::Last | Position::Only)
}

fn fmt_node(f: &mut fmt::Formatter<'_>, prefix: &str, is_last: bool, label: &str) -> fmt::Result {
    let marker = if is_last { "└── " } else { "├── " };
    writeln!(f, "{}{}{}", prefix, marker, label)
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "    " } else { "│   " })
}

fn fmt_step(f: &mut fmt::Formatter<'_>, step: &Step, is_last: bool) -> fmt::Result {
    let label = match step.step_id() {
        Some(step_id) => format!("{} [{}]", step.kind(), step_id),
        None => step.kind().to_string(),
    };
    fmt_node(f, "", is_last, &label)?;

    let prefix = child_prefix("", is_last);
    for (position, (name, field)) in step.fields().into_iter().with_position() {
        match field {
            StepField::Behavior(behavior) => {
                fmt_node(f, &prefix, is_final(position), &format!("{}: {}", name, behavior))?
            }
            StepField::Config(config) => {
                fmt_config(f, &prefix, is_final(position), name, config)?
            }
        }
    }
    Ok(())
}

fn fmt_config(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_last: bool,
    name: &str,
    config: &dyn Configuration,
) -> fmt::Result {
    fmt_node(f, prefix, is_last, &format!("{}: {}", name, config.kind()))?;
    let prefix = child_prefix(prefix, is_last);
    for (position, (field_name, value)) in config.fields().iter().with_position() {
        fmt_field(f, &prefix, is_final(position), field_name, value)?;
    }
    Ok(())
}

fn fmt_field(
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_last: bool,
    name: &str,
    value: &FieldValue,
) -> fmt::Result {
    match value {
        FieldValue::Config(config) => fmt_config(f, prefix, is_last, name, &**config),
        FieldValue::Map(entries) => {
            fmt_node(f, prefix, is_last, name)?;
            let prefix = child_prefix(prefix, is_last);
            for (position, (key, entry)) in entries.iter().with_position() {
                fmt_field(f, &prefix, is_final(position), key, entry)?;
            }
            Ok(())
        }
        FieldValue::List(items) if items.iter().any(is_nested) => {
            fmt_node(f, prefix, is_last, name)?;
            let prefix = child_prefix(prefix, is_last);
            for (position, (index, item)) in items.iter().enumerate().with_position() {
                fmt_field(f, &prefix, is_final(position), &format!("[{}]", index), item)?;
            }
            Ok(())
        }
        leaf => fmt_node(f, prefix, is_last, &format!("{}: {}", name, inline(leaf))),
    }
}

fn is_nested(value: &FieldValue) -> bool {
    match value {
        FieldValue::Config(_) | FieldValue::Map(_) => true,
        FieldValue::List(items) => items.iter().any(is_nested),
        _ => false,
    }
}

fn inline(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Int(n) => n.to_string(),
        FieldValue::Str(s) => format!("{:?}", s),
        FieldValue::Duration(d) => format_duration(d),
        FieldValue::Timestamp(t) => format_timestamp(t),
        FieldValue::Behavior(behavior) => behavior.to_string(),
        FieldValue::List(items) => format!("[{}]", items.iter().map(inline).join(", ")),
        FieldValue::Map(_) => "{..}".to_string(),
        FieldValue::Config(config) => config.kind().to_string(),
    }
}
