//! Common test fixtures: behaviors to reference from steps and ready-made configs.
use dataflow_canon::prelude::*;

/// Routes crate logs to the test harness output. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn acc_values(mut acc: Vec<(i64, String)>, event: (i64, String)) -> Vec<(i64, String)> {
    acc.push(event);
    acc
}

#[allow(dead_code)]
pub fn normalize(x: f64) -> f64 {
    x / 100.0
}

#[allow(dead_code)]
pub fn stringify(x: i64) -> String {
    x.to_string()
}

/// Stand-in for per-key state updated by a `stateful_map` step.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct OrderBook {
    pub data: Vec<i64>,
}

#[allow(dead_code)]
impl OrderBook {
    pub fn update(&mut self, data: i64) {
        self.data.push(data);
    }
}

/// 2005-07-14T12:30:00+00:00
#[allow(dead_code)]
pub fn start_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2005, 7, 14, 12, 30, 0).unwrap()
}

/// Tumbling five-second windows starting at [`start_at`].
#[allow(dead_code)]
pub fn tumbling_window() -> TumblingWindowConfig {
    TumblingWindowConfig::new(Duration::seconds(5)).start_at(start_at())
}

/// Event clock that waits ten seconds for late items.
#[allow(dead_code)]
pub fn event_clock() -> EventClockConfig {
    EventClockConfig::new(behavior!(|event| event), Duration::seconds(10))
}
