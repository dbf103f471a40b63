//! Band indicator LED driver.
//!
//! Three digital outputs, one per band, driven through the
//! `embedded-hal` [`OutputPin`] trait.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `P` is an `esp_idf_hal::gpio::PinDriver` in output mode.
//! On host/test: `P` is a [`SimPin`](super::sim_pin::SimPin).
//!
//! Line writes are attempted on every channel even if an earlier one
//! fails. Failures are logged and counted, never retried.

use embedded_hal::digital::OutputPin;
use log::error;

use crate::app::bands::Band;
use crate::app::indicators::IndicatorState;
use crate::app::ports::IndicatorPort;
use crate::error::{OutputError, Result};

pub struct IndicatorBank<P: OutputPin> {
    /// Lines in [`Band::index`] order: high, mid, low.
    lines: [P; 3],
    current: IndicatorState,
    write_failures: u32,
}

impl<P: OutputPin> IndicatorBank<P> {
    pub fn new(high: P, mid: P, low: P) -> Self {
        Self {
            lines: [high, mid, low],
            current: IndicatorState::all_off(),
            write_failures: 0,
        }
    }

    /// Drive all three lines. Returns the first failure, if any, after
    /// every line has been attempted.
    pub fn apply(&mut self, state: &IndicatorState) -> Result<()> {
        let mut first_err = None;
        for band in Band::ALL {
            let level = state.is_active(band);
            let line = &mut self.lines[band.index()];
            let res = if level { line.set_high() } else { line.set_low() };
            if res.is_err() {
                self.write_failures = self.write_failures.saturating_add(1);
                if first_err.is_none() {
                    first_err = Some(OutputError {
                        channel: band,
                        level,
                    });
                }
            }
        }
        self.current = *state;
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Last state written (what the lines *should* show).
    pub fn current(&self) -> IndicatorState {
        self.current
    }

    /// Total failed line writes since construction.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub fn line(&self, band: Band) -> &P {
        &self.lines[band.index()]
    }
}

impl<P: OutputPin> IndicatorPort for IndicatorBank<P> {
    fn write(&mut self, state: &IndicatorState) {
        if let Err(e) = self.apply(state) {
            error!("indicator {} (failures so far: {})", e, self.write_failures);
        }
    }
}
