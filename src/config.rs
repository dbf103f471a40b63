//! System configuration parameters
//!
//! Everything here is about *where* and *how often*: the cycle period,
//! the seed policy for the simulated source, and which line each band
//! indicator is bound to. Band thresholds live in
//! [`bands`](crate::app::bands) and are not configurable.

use heapless::String;
use serde::{Deserialize, Deserializer, Serialize};

use crate::app::bands::Band;
use crate::app::ports::ConfigError;
use crate::pins;

/// Default wait between two samples.
pub const DEFAULT_CYCLE_PERIOD_MS: u32 = 9_000;

const MIN_CYCLE_PERIOD_MS: u32 = 100;
const MAX_CYCLE_PERIOD_MS: u32 = 3_600_000;

/// Longest channel name kept; longer names are cut at a char boundary,
/// both in [`Channel::new`] and when decoding a config file.
pub const CHANNEL_NAME_CAPACITY: usize = 16;

/// A logical indicator output and the line it is wired to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Human-readable name used in log lines ("red", "blue", ...).
    #[serde(deserialize_with = "deserialize_name")]
    pub name: String<CHANNEL_NAME_CAPACITY>,
    /// Physical GPIO number (ignored by the host simulation except for logs).
    pub gpio: i32,
}

impl Channel {
    /// Build a channel; names longer than 16 bytes are truncated.
    pub fn new(name: &str, gpio: i32) -> Self {
        Self {
            name: truncate_name(name),
            gpio,
        }
    }
}

fn truncate_name(name: &str) -> String<CHANNEL_NAME_CAPACITY> {
    let mut n = String::new();
    for c in name.chars() {
        if n.push(c).is_err() {
            break;
        }
    }
    n
}

fn deserialize_name<'de, D>(d: D) -> Result<String<CHANNEL_NAME_CAPACITY>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = std::string::String::deserialize(d)?;
    Ok(truncate_name(&raw))
}

/// Binding of the three band indicators to lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMap {
    pub high: Channel,
    pub mid: Channel,
    pub low: Channel,
}

impl ChannelMap {
    pub fn get(&self, band: Band) -> &Channel {
        match band {
            Band::High => &self.high,
            Band::Mid => &self.mid,
            Band::Low => &self.low,
        }
    }
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            high: Channel::new(Band::High.colour(), pins::LED_RED_GPIO),
            mid: Channel::new(Band::Mid.colour(), pins::LED_BLUE_GPIO),
            low: Channel::new(Band::Low.colour(), pins::LED_GREEN_GPIO),
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Wait between two cycles (milliseconds)
    pub cycle_period_ms: u32,
    /// Fixed generator seed. `None` seeds from platform entropy.
    pub seed: Option<u64>,
    /// Indicator line bindings
    pub channels: ChannelMap,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            cycle_period_ms: DEFAULT_CYCLE_PERIOD_MS,
            seed: None,
            channels: ChannelMap::default(),
        }
    }
}

impl SystemConfig {
    /// Range-check every field. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_period_ms < MIN_CYCLE_PERIOD_MS {
            return Err(ConfigError::ValidationFailed("cycle_period_ms below 100"));
        }
        if self.cycle_period_ms > MAX_CYCLE_PERIOD_MS {
            return Err(ConfigError::ValidationFailed("cycle_period_ms above one hour"));
        }

        let c = &self.channels;
        for ch in [&c.high, &c.mid, &c.low] {
            if ch.name.is_empty() {
                return Err(ConfigError::ValidationFailed("channel name is empty"));
            }
            if !(0..=pins::MAX_GPIO).contains(&ch.gpio) {
                return Err(ConfigError::ValidationFailed("channel gpio out of range"));
            }
        }
        if c.high.gpio == c.mid.gpio || c.high.gpio == c.low.gpio || c.mid.gpio == c.low.gpio {
            return Err(ConfigError::ValidationFailed("two channels share a gpio"));
        }
        Ok(())
    }
}
