//! Unified error types for the thermoband firmware.
//!
//! The sampling and classification path is infallible. The only failures
//! the program can observe are configuration problems at start-up and
//! indicator line writes, which the driver reports without stopping the
//! loop. All variants are `Copy` so they can be logged and stored without
//! allocation.

use core::fmt;

use crate::app::bands::Band;
use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// An indicator line could not be driven.
    Output(OutputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// A write to the line bound to `channel` failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputError {
    pub channel: Band,
    /// The level that was being written.
    pub level: bool,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line write ({}) failed",
            self.channel.colour(),
            if self.level { "high" } else { "low" }
        )
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
            ConfigError::NotFound => Self::Config("not found"),
            ConfigError::Corrupted => Self::Config("corrupted"),
            ConfigError::IoError => Self::Config("I/O error"),
        }
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
