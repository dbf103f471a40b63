//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (temperature source, indicator lines, event sinks,
//! configuration) implement these traits. The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the domain core never touches hardware directly. Waiting is done
//! through `embedded_hal::delay::DelayNs` rather than a port of our own.

use crate::config::SystemConfig;

use super::indicators::IndicatorState;
use super::reading::Reading;

// ───────────────────────────────────────────────────────────────
// Temperature source (driven adapter: sensor/simulation → domain)
// ───────────────────────────────────────────────────────────────

/// Produces one reading per call. Infallible.
pub trait TemperatureSource {
    fn sample(&mut self) -> Reading;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → LED lines)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the three band indicators.
///
/// Implementations report line failures themselves (log + count); the
/// domain treats a write as fire-and-forget.
pub trait IndicatorPort {
    /// Drive every line to match `state`.
    fn write(&mut self, state: &IndicatorState);

    /// Drive every line inactive.
    fn all_off(&mut self) {
        self.write(&IndicatorState::all_off());
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, a test
/// recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ config source)
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST run [`SystemConfig::validate`] before returning a
/// loaded value. Invalid ranges are rejected with
/// [`ConfigError::ValidationFailed`], not silently clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No stored config (first boot, or no file configured).
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
