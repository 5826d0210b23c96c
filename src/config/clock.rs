use super::{Configuration, FieldValue};
use crate::behavior::Behavior;
use chrono::Duration;

/// Uses the system time as the window clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemClockConfig;

impl Configuration for SystemClockConfig {
    fn kind(&self) -> &str {
        "SystemClockConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        Vec::new()
    }
}

/// Reads each item's timestamp with `dt_getter` and waits up to
/// `wait_for_system_duration` for late items.
#[derive(Debug, Clone, PartialEq)]
pub struct EventClockConfig {
    pub dt_getter: Behavior,
    pub wait_for_system_duration: Duration,
}

impl EventClockConfig {
    pub fn new(dt_getter: Behavior, wait_for_system_duration: Duration) -> Self {
        Self {
            dt_getter,
            wait_for_system_duration,
        }
    }
}

impl Configuration for EventClockConfig {
    fn kind(&self) -> &str {
        "EventClockConfig"
    }

    fn fields(&self) -> Vec<(&str, FieldValue)> {
        vec![
            ("dt_getter", self.dt_getter.clone().into()),
            (
                "wait_for_system_duration",
                self.wait_for_system_duration.into(),
            ),
        ]
    }
}

config_family! {
    /// Which notion of time drives windowing.
    ClockConfig {
        System(SystemClockConfig),
        Event(EventClockConfig),
    }
}
