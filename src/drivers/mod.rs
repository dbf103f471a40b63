//! Indicator line drivers.

pub mod indicator;
pub mod sim_pin;
