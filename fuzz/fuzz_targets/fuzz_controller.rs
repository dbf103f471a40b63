//! Fuzz target: `controller::apply`
//!
//! Any 32-bit pattern (NaN, infinities, subnormals included) and any
//! prior indicator state must leave at most one indicator on, and the
//! result must not change when applied again.
//!
//! cargo fuzz run fuzz_controller

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermoband::app::controller::apply;
use thermoband::app::indicators::IndicatorState;
use thermoband::app::reading::Reading;

fuzz_target!(|data: [u8; 5]| {
    let t = f32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let mut state = IndicatorState {
        high: data[4] & 1 != 0,
        mid: data[4] & 2 != 0,
        low: data[4] & 4 != 0,
    };

    let first = apply(Reading::new(t), &mut state);
    assert!(state.active_count() <= 1);
    assert_eq!(state.active(), first.band);

    let snapshot = state;
    apply(Reading::new(t), &mut state);
    assert_eq!(snapshot, state);
});
