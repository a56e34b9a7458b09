//! Climate loop cycles: tick → indicators → frames.

use careclimate::app::climate::ClimateController;
use careclimate::app::ports::Indicator;
use careclimate::app::state::SystemState;
use careclimate::config::SystemConfig;
use careclimate::SensorError;

use crate::mock_hw::{ActuatorCall, MockHardware, MockLink};

fn make_loop() -> (ClimateController, SystemState, MockLink) {
    let state = SystemState::new();
    state.enable();
    (
        ClimateController::new(&SystemConfig::default()),
        state,
        MockLink::new(),
    )
}

#[test]
fn hot_cycle_cools_and_reports_in_order() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(55.0, 26.0);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(hw.indicator(Indicator::Cooling), Some(true));
    assert_eq!(hw.indicator(Indicator::Heating), Some(false));
    assert_eq!(
        link.frames,
        ["*H55%*", "*I55*", "*T26*", "*S ENCENDIDO\n*", "*C APAGADA\n*"]
    );
}

#[test]
fn cold_cycle_heats() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(40.0, 15.0);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(hw.indicator(Indicator::Cooling), Some(false));
    assert_eq!(hw.indicator(Indicator::Heating), Some(true));
    assert_eq!(
        link.frames,
        ["*H40%*", "*I40*", "*T15*", "*S APAGADO\n*", "*C ENCENDIDA\n*"]
    );
}

#[test]
fn comfortable_cycle_switches_both_off() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(60.0, 20.0);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(hw.indicator(Indicator::Cooling), Some(false));
    assert_eq!(hw.indicator(Indicator::Heating), Some(false));
    assert_eq!(
        link.frames,
        ["*H60%*", "*I60*", "*T20*", "*S APAGADO\n*", "*C APAGADA\n*"]
    );
}

#[test]
fn dead_band_cycle_reports_humidity_only_and_leaves_actuators_alone() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(55.0, 22.5);

    ctrl.tick(&state, &mut hw, &mut link);

    assert!(
        hw.calls.is_empty(),
        "22.5 °C is in the dead band — no actuation, got {:?}",
        hw.calls
    );
    assert_eq!(link.frames, ["*H55%*", "*I55*"]);
}

#[test]
fn sensor_miss_skips_the_whole_cycle() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::new();
    hw.climate = Err(SensorError::ChecksumMismatch);

    ctrl.tick(&state, &mut hw, &mut link);

    assert!(hw.calls.is_empty());
    assert!(link.frames.is_empty(), "a sensor miss must stay silent");
}

#[test]
fn disabled_cycle_sends_zeroed_report_without_actuation() {
    let (mut ctrl, state, mut link) = make_loop();
    state.disable();
    let mut hw = MockHardware::with_climate(55.0, 26.0);

    ctrl.tick(&state, &mut hw, &mut link);

    assert!(hw.calls.is_empty(), "disabled cycles never actuate");
    assert_eq!(
        link.frames,
        ["*H0%*", "*I0*", "*T0*", "*S APAGADO\n*", "*C APAGADA\n*"]
    );
}

#[test]
fn disabled_report_ignores_prior_readings_until_reenabled() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(55.0, 26.0);

    // One hot cycle, then disable.
    ctrl.tick(&state, &mut hw, &mut link);
    state.disable();
    link.frames.clear();
    hw.calls.clear();

    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(link.frames[2], "*T0*", "temperature must read 0 while disabled");

    // Re-enable: the next cycle reports real values again.
    state.enable();
    link.frames.clear();
    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(link.frames[2], "*T26*");
}

#[test]
fn successive_cycles_recompute_from_scratch() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::with_climate(55.0, 26.0);

    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(hw.indicator(Indicator::Cooling), Some(true));

    // Temperature drops into the comfort band: both indicators commanded
    // off, with no memory of the cooling cycle.
    hw.climate = Ok(careclimate::app::ports::ClimateReading {
        humidity_pct: 55.0,
        temperature_c: 19.0,
    });
    hw.calls.clear();
    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(
        hw.calls,
        [
            ActuatorCall::SetIndicator { which: Indicator::Cooling, on: false },
            ActuatorCall::SetIndicator { which: Indicator::Heating, on: false },
        ]
    );
}
