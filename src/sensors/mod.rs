//! Temperature sources.
//!
//! Only a simulated source exists; real sensor interfacing is out of scope.
//! Anything implementing [`TemperatureSource`](crate::app::ports::TemperatureSource)
//! can replace it.

pub mod simulated;
