//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements     | Connects to                 |
//! |----------------|----------------|-----------------------------|
//! | `config_file`  | ConfigPort     | JSON file (host)            |
//! | `delay`        | DelayNs        | `std::thread::sleep` (host) |
//! | `log_sink`     | EventSink      | `log` facade                |
//!
//! The indicator lines are driven by
//! [`IndicatorBank`](crate::drivers::indicator::IndicatorBank) and the
//! readings come from [`sensors`](crate::sensors).

pub mod config_file;
pub mod delay;
pub mod log_sink;
