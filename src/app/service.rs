//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the indicator state and the cycle counter. All I/O
//! flows through port traits injected at call sites, making the whole
//! cycle testable with mock adapters.
//!
//! ```text
//!  TemperatureSource ──▶ ┌──────────────────────┐ ──▶ EventSink
//!                        │      AppService      │
//!      IndicatorPort ◀── │  classify · indicate │
//!                        └──────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::SystemConfig;

use super::controller::{self, Outcome};
use super::events::AppEvent;
use super::indicators::IndicatorState;
use super::ports::{EventSink, IndicatorPort, TemperatureSource};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// Runs the sample → decide → log → wait cycle.
pub struct AppService {
    config: SystemConfig,
    indicators: IndicatorState,
    cycle_count: u64,
}

impl AppService {
    /// Construct the service. Does **not** touch the lines — call
    /// [`start`](Self::start) (or [`run`](Self::run)) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            indicators: IndicatorState::all_off(),
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every indicator off and announce the start.
    pub fn start(&mut self, port: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        self.indicators.clear();
        port.all_off();
        sink.emit(&AppEvent::Started {
            cycle_period_ms: self.config.cycle_period_ms,
        });
        info!(
            "AppService started, cycle period {} ms",
            self.config.cycle_period_ms
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one cycle without the trailing wait:
    /// sample → classify → drive lines → emit events.
    pub fn run_cycle(
        &mut self,
        source: &mut impl TemperatureSource,
        port: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) -> Outcome {
        self.cycle_count += 1;

        let reading = source.sample();
        sink.emit(&AppEvent::Sampled {
            cycle: self.cycle_count,
            reading,
        });

        let outcome = controller::apply(reading, &mut self.indicators);
        port.write(&self.indicators);

        sink.emit(&AppEvent::Indicated(outcome));
        if outcome.warning {
            sink.emit(&AppEvent::OverTemperature(reading));
        }

        debug!(
            "cycle {} done: band={:?} lines={:?}",
            self.cycle_count,
            outcome.band,
            self.indicators.levels()
        );
        outcome
    }

    /// Start, then cycle forever with `cycle_period_ms` between samples.
    /// There is no exit path; the loop ends only with the process.
    pub fn run(
        &mut self,
        source: &mut impl TemperatureSource,
        port: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> ! {
        self.start(port, sink);
        loop {
            self.run_cycle(source, port, sink);
            delay.delay_ms(self.config.cycle_period_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Indicator state after the last cycle.
    pub fn indicators(&self) -> IndicatorState {
        self.indicators
    }

    /// Cycles executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}
