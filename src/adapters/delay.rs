//! Blocking delay for the host simulation.
//!
//! - **`feature = "espidf"`** — `main` uses `esp_idf_hal::delay::FreeRtos`,
//!   which already implements `DelayNs`.
//! - **otherwise** — [`StdDelay`] sleeps the calling thread.

use embedded_hal::delay::DelayNs;

/// `DelayNs` backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
