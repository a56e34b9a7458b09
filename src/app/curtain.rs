//! Curtain control loop — motorized curtain from averaged ambient light.
//!
//! Runs once per 2 s tick. Each cycle fills a fresh ten-sample window from
//! the light sensor, averages it, converts to lux through the fixed
//! calibration divisor, and compares against the threshold directly — no
//! hysteresis band, so oscillation near the threshold is possible and
//! accepted.

use log::info;

use crate::config::SystemConfig;

use super::ports::{CurtainMotorPort, FrameLink, LightSensorPort};
use super::reporter::{self, CurtainDecision};
use super::state::SystemState;

/// Raw samples taken per cycle. The window is rebuilt from scratch every
/// cycle; nothing slides or carries over.
pub const LIGHT_SAMPLES: usize = 10;

/// Periodic light-averaging controller for the curtain motor.
pub struct CurtainController {
    threshold_lux: u16,
    lux_divisor: u16,
    open_angle_deg: i8,
    closed_angle_deg: i8,
}

impl CurtainController {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            threshold_lux: config.light_threshold_lux,
            lux_divisor: config.lux_divisor,
            open_angle_deg: config.open_angle_deg,
            closed_angle_deg: config.closed_angle_deg,
        }
    }

    /// Truncated integer mean of the window, then truncated division by
    /// the calibration divisor. Both truncations are part of the
    /// observable behaviour: a raw mean of 3004 is 600 lux, not 601.
    pub fn window_lux(&self, samples: &[u16; LIGHT_SAMPLES]) -> u16 {
        let sum: u32 = samples.iter().map(|&s| u32::from(s)).sum();
        let avg = sum / LIGHT_SAMPLES as u32;
        (avg / u32::from(self.lux_divisor)) as u16
    }

    /// Run one full curtain cycle: enable check → sample window → average
    /// → threshold → actuate → report.
    pub fn tick(
        &mut self,
        state: &SystemState,
        hw: &mut (impl LightSensorPort + CurtainMotorPort),
        link: &mut impl FrameLink,
    ) {
        if !state.is_enabled() {
            // Zeroed report, curtain left where it is.
            reporter::report_curtain(link, &CurtainDecision { lux: 0, open: false });
            return;
        }

        // Samples are taken back-to-back and unvalidated: the port always
        // produces a value.
        let mut samples = [0u16; LIGHT_SAMPLES];
        for slot in &mut samples {
            *slot = hw.read_raw();
        }

        let lux = self.window_lux(&samples);
        let open = lux > self.threshold_lux;

        if open {
            info!("curtain: {lux} lux above threshold, opening");
            hw.set_curtain_angle(self.open_angle_deg);
        } else {
            info!("curtain: {lux} lux at or below threshold, closing");
            hw.set_curtain_angle(self.closed_angle_deg);
        }

        reporter::report_curtain(link, &CurtainDecision { lux, open });
    }
}
