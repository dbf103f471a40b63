//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port once per cycle step.

use super::controller::Outcome;
use super::reading::Reading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Indicators initialised off; the loop is about to start.
    Started { cycle_period_ms: u32 },

    /// A new reading was taken.
    Sampled { cycle: u64, reading: Reading },

    /// The controller settled the indicators for this cycle.
    Indicated(Outcome),

    /// The reading landed in the high band.
    OverTemperature(Reading),
}
