//! Fuzz target: `JsonConfigFile::parse`
//!
//! Feeds arbitrary bytes through config decoding + validation and asserts
//! that anything accepted is actually valid.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermoband::adapters::config_file::JsonConfigFile;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = JsonConfigFile::parse(text) {
        assert!(cfg.validate().is_ok(), "parse returned an invalid config");
        let c = &cfg.channels;
        assert!(c.high.gpio != c.mid.gpio && c.mid.gpio != c.low.gpio && c.high.gpio != c.low.gpio);
    }
});
