//! Inbound command handling and its effect on both loops.

use careclimate::app::climate::ClimateController;
use careclimate::app::curtain::CurtainController;
use careclimate::app::dispatcher;
use careclimate::app::ports::Indicator;
use careclimate::app::state::SystemState;
use careclimate::config::SystemConfig;

use crate::mock_hw::{MockHardware, MockLink};

#[test]
fn enable_then_disable_round_trip() {
    let state = SystemState::new();
    let mut hw = MockHardware::new();

    dispatcher::dispatch(&state, &mut hw, b"E");
    assert!(state.is_enabled());
    assert_eq!(hw.indicator(Indicator::SystemOn), Some(true));

    dispatcher::dispatch(&state, &mut hw, b"A");
    assert!(!state.is_enabled());
    assert_eq!(hw.indicator(Indicator::SystemOn), Some(false));
}

#[test]
fn unknown_frame_changes_nothing() {
    let state = SystemState::new();
    let mut hw = MockHardware::new();

    dispatcher::dispatch(&state, &mut hw, b"X123");

    assert!(!state.is_enabled());
    assert!(hw.calls.is_empty(), "no indicator change on unknown frames");
}

#[test]
fn repeated_enables_are_idempotent() {
    let state = SystemState::new();
    let mut hw = MockHardware::new();

    dispatcher::dispatch(&state, &mut hw, b"E");
    let calls_after_first = hw.calls.len();
    dispatcher::dispatch(&state, &mut hw, b"E");

    assert!(state.is_enabled());
    // The indicator is re-driven to the same value — state is unchanged.
    assert_eq!(hw.indicator(Indicator::SystemOn), Some(true));
    assert_eq!(hw.calls.len(), calls_after_first * 2);
}

#[test]
fn disable_mid_run_zeroes_both_loops_reports() {
    let config = SystemConfig::default();
    let state = SystemState::new();
    let mut climate = ClimateController::new(&config);
    let mut curtain = CurtainController::new(&config);
    let mut panel = MockHardware::new();
    let mut link = MockLink::new();

    dispatcher::dispatch(&state, &mut panel, b"E");

    // Hot and bright while enabled.
    let mut climate_hw = MockHardware::with_climate(55.0, 26.0);
    let mut curtain_hw = MockHardware::with_light_level(3005);
    climate.tick(&state, &mut climate_hw, &mut link);
    curtain.tick(&state, &mut curtain_hw, &mut link);
    assert!(link.frames.contains(&"*T26*".to_owned()));
    assert!(link.frames.contains(&"*M ABIERTA\n*".to_owned()));

    // Disable: both loops fall back to zeroed reports regardless of the
    // unchanged sensor values.
    dispatcher::dispatch(&state, &mut panel, b"A");
    link.frames.clear();
    climate.tick(&state, &mut climate_hw, &mut link);
    curtain.tick(&state, &mut curtain_hw, &mut link);
    assert_eq!(
        link.frames,
        [
            "*H0%*",
            "*I0*",
            "*T0*",
            "*S APAGADO\n*",
            "*C APAGADA\n*",
            "*L 0\n*",
            "*M CERRADA\n*"
        ]
    );
}
