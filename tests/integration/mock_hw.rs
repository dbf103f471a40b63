//! Mock adapters for integration tests.
//!
//! Records every indicator write and every event so tests can assert on
//! the full history without touching real GPIO.

use std::collections::VecDeque;

use thermoband::app::events::AppEvent;
use thermoband::app::indicators::IndicatorState;
use thermoband::app::ports::{EventSink, IndicatorPort, TemperatureSource};
use thermoband::app::reading::Reading;

// ── Scripted source ───────────────────────────────────────────

/// Replays a fixed list of readings, then repeats the last one.
pub struct ScriptedSource {
    queue: VecDeque<f32>,
    last: f32,
}

impl ScriptedSource {
    pub fn new(readings: &[f32]) -> Self {
        Self {
            queue: readings.iter().copied().collect(),
            last: readings.last().copied().unwrap_or(0.0),
        }
    }
}

impl TemperatureSource for ScriptedSource {
    fn sample(&mut self) -> Reading {
        if let Some(t) = self.queue.pop_front() {
            self.last = t;
        }
        Reading::new(self.last)
    }
}

// ── MockIndicators ────────────────────────────────────────────

pub struct MockIndicators {
    pub writes: Vec<IndicatorState>,
}

#[allow(dead_code)]
impl MockIndicators {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    pub fn last(&self) -> Option<&IndicatorState> {
        self.writes.last()
    }
}

impl Default for MockIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorPort for MockIndicators {
    fn write(&mut self, state: &IndicatorState) {
        self.writes.push(*state);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn warnings(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::OverTemperature(_)))
            .count()
    }

    pub fn samples(&self) -> Vec<Reading> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Sampled { reading, .. } => Some(*reading),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
