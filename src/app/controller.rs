//! Output controller: reading → indicator state.
//!
//! Pure and idempotent. Every application clears all three flags before
//! setting the selected one, so at most one indicator is ever on no
//! matter what state it is handed.

use super::bands::Band;
use super::indicators::IndicatorState;
use super::reading::Reading;

/// Result of one controller application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub reading: Reading,
    /// The band whose indicator is now on, `None` if all are off.
    pub band: Option<Band>,
    /// An over-temperature warning must be raised.
    pub warning: bool,
}

/// Classify `reading` and rewrite `state` to match.
pub fn apply(reading: Reading, state: &mut IndicatorState) -> Outcome {
    state.clear();

    let band = Band::classify(reading);
    if let Some(b) = band {
        state.set(b);
    }

    Outcome {
        reading,
        band,
        warning: band.is_some_and(Band::warns),
    }
}
