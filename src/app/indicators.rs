//! Explicit indicator output state.
//!
//! Replaces hidden process-wide output flags: the service owns one of
//! these, the controller mutates it, and the indicator driver mirrors it
//! onto the physical lines.

use super::bands::Band;

/// On/off state of the three band indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub high: bool,
    pub mid: bool,
    pub low: bool,
}

impl IndicatorState {
    /// All indicators off (start-up state).
    pub const fn all_off() -> Self {
        Self {
            high: false,
            mid: false,
            low: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::all_off();
    }

    /// Turn one indicator on. Does not touch the others; callers that
    /// need mutual exclusion [`clear`](Self::clear) first.
    pub fn set(&mut self, band: Band) {
        match band {
            Band::High => self.high = true,
            Band::Mid => self.mid = true,
            Band::Low => self.low = true,
        }
    }

    pub const fn is_active(&self, band: Band) -> bool {
        match band {
            Band::High => self.high,
            Band::Mid => self.mid,
            Band::Low => self.low,
        }
    }

    /// Number of indicators currently on.
    pub fn active_count(&self) -> usize {
        Band::ALL.iter().filter(|b| self.is_active(**b)).count()
    }

    /// The active band, if exactly one indicator is on.
    pub fn active(&self) -> Option<Band> {
        let mut on = Band::ALL.into_iter().filter(|b| self.is_active(*b));
        match (on.next(), on.next()) {
            (Some(b), None) => Some(b),
            _ => None,
        }
    }

    /// Line levels in [`Band::index`] order.
    pub const fn levels(&self) -> [bool; 3] {
        [self.high, self.mid, self.low]
    }
}
