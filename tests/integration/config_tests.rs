//! Config loading through the ConfigPort.

use thermoband::adapters::config_file::JsonConfigFile;
use thermoband::app::ports::{ConfigError, ConfigPort};
use thermoband::config::SystemConfig;

#[test]
fn channel_map_from_json() {
    let cfg = JsonConfigFile::parse(
        r#"{
            "cycle_period_ms": 2000,
            "channels": {
                "high": { "name": "alarm", "gpio": 2 },
                "mid":  { "name": "ok",    "gpio": 3 },
                "low":  { "name": "cold",  "gpio": 4 }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.cycle_period_ms, 2000);
    assert_eq!(cfg.channels.high.name.as_str(), "alarm");
    assert_eq!(cfg.channels.low.gpio, 4);
    assert_eq!(cfg.seed, None);
}

#[test]
fn duplicate_lines_rejected() {
    let err = JsonConfigFile::parse(
        r#"{ "channels": {
                "high": { "name": "a", "gpio": 5 },
                "mid":  { "name": "b", "gpio": 5 },
                "low":  { "name": "c", "gpio": 6 } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed(_)));
}

#[test]
fn file_roundtrip() {
    let cfg = SystemConfig {
        seed: Some(99),
        cycle_period_ms: 500,
        ..SystemConfig::default()
    };
    let path = std::env::temp_dir().join(format!("thermoband-it-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

    let loaded = JsonConfigFile::new(&path).load().unwrap();
    assert_eq!(loaded, cfg);
    std::fs::remove_file(path).ok();
}

#[test]
fn over_long_channel_name_is_truncated_not_rejected() {
    let cfg = JsonConfigFile::parse(
        r#"{ "channels": {
                "high": { "name": "overtemperature-alarm", "gpio": 2 },
                "mid":  { "name": "ok", "gpio": 3 },
                "low":  { "name": "cold", "gpio": 4 } } }"#,
    )
    .unwrap();
    assert_eq!(cfg.channels.high.name.as_str(), "overtemperature-");
}
