//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (serial console on the board, stderr on the host). One line per
//! sample, one per outcome, plus a `warn` line for the high band.

use log::{info, warn};

use crate::app::bands::Band;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::app::reading::Reading;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome line text, e.g. `[LED] Red on (32.5°C)`.
pub fn outcome_line(band: Option<Band>, reading: Reading) -> String {
    match band {
        Some(Band::High) => format!("[LED] Red on ({reading})"),
        Some(Band::Mid) => format!("[LED] Blue on ({reading})"),
        Some(Band::Low) => format!("[LED] Green on ({reading})"),
        None => format!("[LED] No LED on ({reading})"),
    }
}

pub const OVER_TEMPERATURE_LINE: &str = "Temperature is above the allowed range!";

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { cycle_period_ms } => {
                info!("START | indicators off, sampling every {} ms", cycle_period_ms);
            }
            AppEvent::Sampled { reading, .. } => {
                info!("--> Temperature read: {}", reading);
            }
            AppEvent::Indicated(outcome) => {
                info!("{}", outcome_line(outcome.band, outcome.reading));
            }
            AppEvent::OverTemperature(_) => {
                warn!("{}", OVER_TEMPERATURE_LINE);
            }
        }
    }
}
