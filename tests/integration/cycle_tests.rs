//! AppService cycles against mock ports.

use thermoband::app::bands::Band;
use thermoband::app::events::AppEvent;
use thermoband::app::indicators::IndicatorState;
use thermoband::app::reading::Reading;
use thermoband::app::service::AppService;
use thermoband::config::SystemConfig;

use super::mock_hw::{MockIndicators, RecordingSink, ScriptedSource};

fn service() -> AppService {
    AppService::new(SystemConfig::default())
}

#[test]
fn start_then_cycles_follow_the_script() {
    let mut app = service();
    let mut src = ScriptedSource::new(&[32.5, 25.0, 19.9, 20.5]);
    let mut hw = MockIndicators::new();
    let mut sink = RecordingSink::new();

    app.start(&mut hw, &mut sink);
    let bands: Vec<_> = (0..4)
        .map(|_| app.run_cycle(&mut src, &mut hw, &mut sink).band)
        .collect();

    assert_eq!(bands, vec![Some(Band::High), Some(Band::Mid), Some(Band::Low), None]);
    assert_eq!(hw.writes[0], IndicatorState::all_off());
    assert_eq!(hw.writes.len(), 5);
    assert_eq!(hw.last(), Some(&IndicatorState::all_off()));
    assert_eq!(app.cycle_count(), 4);
}

#[test]
fn only_high_band_warns() {
    let mut app = service();
    let mut src = ScriptedSource::new(&[44.9, 30.0, 29.0, 21.0, 17.0]);
    let mut hw = MockIndicators::new();
    let mut sink = RecordingSink::new();

    for _ in 0..5 {
        app.run_cycle(&mut src, &mut hw, &mut sink);
    }
    assert_eq!(sink.warnings(), 2);
}

#[test]
fn event_order_per_cycle() {
    let mut app = service();
    let mut src = ScriptedSource::new(&[35.0]);
    let mut hw = MockIndicators::new();
    let mut sink = RecordingSink::new();

    let outcome = app.run_cycle(&mut src, &mut hw, &mut sink);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::Sampled {
                cycle: 1,
                reading: Reading::new(35.0)
            },
            AppEvent::Indicated(outcome),
            AppEvent::OverTemperature(Reading::new(35.0)),
        ]
    );
}

#[test]
fn every_write_has_at_most_one_line_on() {
    let mut app = service();
    let script: Vec<f32> = (0..300).map(|i| 10.0 + i as f32 * 0.15).collect();
    let mut src = ScriptedSource::new(&script);
    let mut hw = MockIndicators::new();
    let mut sink = RecordingSink::new();

    app.start(&mut hw, &mut sink);
    for _ in 0..script.len() {
        app.run_cycle(&mut src, &mut hw, &mut sink);
    }
    assert!(hw.writes.iter().all(|s| s.active_count() <= 1));
    assert_eq!(sink.samples().len(), script.len());
}

#[test]
fn indicators_query_matches_last_write() {
    let mut app = service();
    let mut src = ScriptedSource::new(&[22.0]);
    let mut hw = MockIndicators::new();
    let mut sink = RecordingSink::new();

    app.run_cycle(&mut src, &mut hw, &mut sink);
    assert_eq!(hw.last(), Some(&app.indicators()));
    assert!(app.indicators().mid);
}
