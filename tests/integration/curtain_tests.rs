//! Curtain loop cycles: tick → ten samples → servo → frames.

use careclimate::app::curtain::{CurtainController, LIGHT_SAMPLES};
use careclimate::app::state::SystemState;
use careclimate::config::SystemConfig;

use crate::mock_hw::{MockHardware, MockLink};

fn make_loop() -> (CurtainController, SystemState, MockLink) {
    let state = SystemState::new();
    state.enable();
    (
        CurtainController::new(&SystemConfig::default()),
        state,
        MockLink::new(),
    )
}

#[test]
fn bright_cycle_opens_the_curtain() {
    let (mut ctrl, state, mut link) = make_loop();
    // 3005 raw → mean 3005 → 601 lux, just above the threshold.
    let mut hw = MockHardware::with_light_level(3005);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(hw.curtain_angle(), Some(0));
    assert_eq!(link.frames, ["*L 601\n*", "*M ABIERTA\n*"]);
}

#[test]
fn threshold_is_exclusive_so_600_lux_closes() {
    let (mut ctrl, state, mut link) = make_loop();
    // 3000 raw → 600 lux exactly: not above the threshold.
    let mut hw = MockHardware::with_light_level(3000);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(hw.curtain_angle(), Some(-90));
    assert_eq!(link.frames, ["*L 600\n*", "*M CERRADA\n*"]);
}

#[test]
fn exactly_ten_samples_are_taken_per_cycle() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::new();
    hw.light_samples.extend(std::iter::repeat(3005).take(LIGHT_SAMPLES));

    ctrl.tick(&state, &mut hw, &mut link);

    assert!(
        hw.light_samples.is_empty(),
        "the cycle must consume exactly {LIGHT_SAMPLES} samples"
    );
    assert_eq!(link.frames[0], "*L 601\n*");
}

#[test]
fn window_is_rebuilt_fresh_each_cycle() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::new();

    // Bright cycle, then a dark one: the second window must not inherit
    // any of the first cycle's samples.
    hw.light_samples.extend(std::iter::repeat(4000).take(LIGHT_SAMPLES));
    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(link.frames, ["*L 800\n*", "*M ABIERTA\n*"]);

    link.frames.clear();
    hw.light_samples.extend(std::iter::repeat(500).take(LIGHT_SAMPLES));
    ctrl.tick(&state, &mut hw, &mut link);
    assert_eq!(link.frames, ["*L 100\n*", "*M CERRADA\n*"]);
    assert_eq!(hw.curtain_angle(), Some(-90));
}

#[test]
fn mixed_window_is_averaged_before_the_divisor() {
    let (mut ctrl, state, mut link) = make_loop();
    let mut hw = MockHardware::new();
    // Five samples at 2000, five at 4000 → mean 3000 → 600 lux → closed.
    hw.light_samples.extend([2000u16; 5]);
    hw.light_samples.extend([4000u16; 5]);

    ctrl.tick(&state, &mut hw, &mut link);

    assert_eq!(link.frames, ["*L 600\n*", "*M CERRADA\n*"]);
}

#[test]
fn disabled_cycle_sends_zeroed_report_without_sampling() {
    let (mut ctrl, state, mut link) = make_loop();
    state.disable();
    let mut hw = MockHardware::with_light_level(4000);
    hw.light_samples.extend([4000u16; 10]);

    ctrl.tick(&state, &mut hw, &mut link);

    assert!(hw.calls.is_empty(), "disabled cycles never actuate");
    assert_eq!(
        hw.light_samples.len(),
        10,
        "disabled cycles must not touch the light port"
    );
    assert_eq!(link.frames, ["*L 0\n*", "*M CERRADA\n*"]);
}
