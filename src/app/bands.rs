//! Temperature bands and their fixed thresholds.
//!
//! Bounds are inclusive on both ends. Anything between two bands, outside
//! all of them, or NaN maps to no band.

use core::fmt;
use core::ops::RangeInclusive;

use super::reading::Reading;

pub const HIGH_MIN_C: f32 = 30.0;
pub const HIGH_MAX_C: f32 = 45.0;
pub const MID_MIN_C: f32 = 21.0;
pub const MID_MAX_C: f32 = 29.0;
pub const LOW_MIN_C: f32 = 17.0;
pub const LOW_MAX_C: f32 = 20.0;

/// One of the three indicator bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 30 °C to 45 °C — red, raises an over-temperature warning.
    High,
    /// 21 °C to 29 °C — blue.
    Mid,
    /// 17 °C to 20 °C — green.
    Low,
}

impl Band {
    /// Evaluation order: the first band whose range contains the reading wins.
    pub const ALL: [Band; 3] = [Band::High, Band::Mid, Band::Low];

    pub const fn range(self) -> RangeInclusive<f32> {
        match self {
            Self::High => HIGH_MIN_C..=HIGH_MAX_C,
            Self::Mid => MID_MIN_C..=MID_MAX_C,
            Self::Low => LOW_MIN_C..=LOW_MAX_C,
        }
    }

    /// Map a reading to its band, if any.
    pub fn classify(reading: Reading) -> Option<Band> {
        let t = reading.celsius();
        Self::ALL.into_iter().find(|b| b.range().contains(&t))
    }

    /// Whether landing in this band must raise a warning.
    pub const fn warns(self) -> bool {
        matches!(self, Self::High)
    }

    /// LED colour wired to this band.
    pub const fn colour(self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Mid => "blue",
            Self::Low => "green",
        }
    }

    /// Array slot used by [`IndicatorState`](super::indicators::IndicatorState)
    /// and the indicator driver.
    pub const fn index(self) -> usize {
        match self {
            Self::High => 0,
            Self::Mid => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        })
    }
}
