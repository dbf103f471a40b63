//! Simulated output line for host builds and tests.
//!
//! Implements the `embedded-hal` [`OutputPin`] trait with an in-memory
//! level and a toggle counter, so tests can see both the final state and
//! how often a line was actually switched.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use log::trace;

#[derive(Debug)]
pub struct SimPin {
    gpio: i32,
    high: bool,
    transitions: u32,
}

impl SimPin {
    /// New line, initially low.
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            high: false,
            transitions: 0,
        }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Number of low↔high level changes.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    fn drive(&mut self, high: bool) {
        if self.high != high {
            self.transitions += 1;
            trace!("sim gpio{} -> {}", self.gpio, u8::from(high));
        }
        self.high = high;
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(true);
        Ok(())
    }
}
