//! The single unit of data flowing through one cycle.

use core::fmt;

/// One temperature sample in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reading(f32);

impl Reading {
    pub const fn new(celsius: f32) -> Self {
        Self(celsius)
    }

    pub const fn celsius(self) -> f32 {
        self.0
    }
}

/// Renders one decimal place, e.g. `32.5°C`.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\u{00b0}C", self.0)
    }
}
