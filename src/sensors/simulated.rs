//! Simulated thermometer.
//!
//! Each sample is `17.0 + n / 10.0` with `n` drawn uniformly from
//! `0..280`, so readings step by 0.1 °C across [17.0, 44.9].
//!
//! The generator belongs to the sensor rather than the process, and is
//! seeded explicitly: [`SimulatedThermometer::from_seed`] for reproducible
//! runs, [`entropy_seed`] when every boot should differ.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::app::ports::TemperatureSource;
use crate::app::reading::Reading;

pub const BASE_C: f32 = 17.0;
pub const STEPS: u32 = 280;
pub const STEP_C: f32 = 0.1;

pub struct SimulatedThermometer<R: RngCore = ChaCha8Rng> {
    rng: R,
}

impl SimulatedThermometer<ChaCha8Rng> {
    /// Same seed, same sequence of readings.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SimulatedThermometer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> TemperatureSource for SimulatedThermometer<R> {
    fn sample(&mut self) -> Reading {
        let n = self.rng.gen_range(0..STEPS);
        Reading::new(BASE_C + n as f32 / 10.0)
    }
}

/// Fresh 64-bit seed from the ESP32 hardware RNG.
#[cfg(feature = "espidf")]
pub fn entropy_seed() -> u64 {
    // SAFETY: esp_random reads the hardware RNG register; no preconditions.
    let (hi, lo) = unsafe { (esp_idf_sys::esp_random(), esp_idf_sys::esp_random()) };
    (u64::from(hi) << 32) | u64::from(lo)
}

/// Fresh 64-bit seed from the operating system RNG.
#[cfg(not(feature = "espidf"))]
pub fn entropy_seed() -> u64 {
    rand::rngs::OsRng.next_u64()
}
