//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the monitor: the fixed temperature
//! bands, the reading → indicator mapping, and the sampling cycle. All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod bands;
pub mod controller;
pub mod events;
pub mod indicators;
pub mod ports;
pub mod reading;
pub mod service;
