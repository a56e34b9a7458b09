//! Climate control loop — HVAC indicator control from temperature.
//!
//! Runs once per 1 s tick. Each cycle classifies the latest reading
//! against the fixed thresholds from scratch; nothing carries over from
//! the previous cycle, so the observable behaviour is a pure function of
//! the reading.
//!
//! The band `low < t <= high` (21–24 °C) matches no branch: actuators and
//! report are left untouched for that cycle ([`HvacAction::Hold`]).

use log::{debug, info};

use crate::config::SystemConfig;

use super::ports::{ClimateSensorPort, FrameLink, Indicator, IndicatorPort};
use super::reporter::{self, ClimateDecision};
use super::state::SystemState;

/// What one cycle decided to do with the HVAC pair.
///
/// Derived fresh from each reading; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacAction {
    /// Above the high threshold: cooling on, heating off.
    Cool,
    /// Below the heat threshold: heating on, cooling off.
    Heat,
    /// Within the comfortable band at or below the low threshold: both off.
    AllOff,
    /// Dead band between low and high: leave actuators and report as-is.
    Hold,
}

/// Periodic hysteresis controller for the HVAC indicator pair.
pub struct ClimateController {
    high_temp_c: f32,
    low_temp_c: f32,
    heat_temp_c: f32,
}

impl ClimateController {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            high_temp_c: f32::from(config.high_temp_c),
            low_temp_c: f32::from(config.low_temp_c),
            heat_temp_c: f32::from(config.heat_temp_c),
        }
    }

    /// Classify a temperature reading. Branch precedence is fixed:
    /// `> high` wins, then `< heat`, then `<= low`; what is left over is
    /// the dead band.
    pub fn classify(&self, temperature_c: f32) -> HvacAction {
        if temperature_c > self.high_temp_c {
            HvacAction::Cool
        } else if temperature_c < self.heat_temp_c {
            HvacAction::Heat
        } else if temperature_c <= self.low_temp_c {
            HvacAction::AllOff
        } else {
            HvacAction::Hold
        }
    }

    /// Run one full climate cycle: enable check → read → classify →
    /// actuate → report.
    ///
    /// The `hw` parameter satisfies **both** [`ClimateSensorPort`] and
    /// [`IndicatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        state: &SystemState,
        hw: &mut (impl ClimateSensorPort + IndicatorPort),
        link: &mut impl FrameLink,
    ) {
        if !state.is_enabled() {
            // Zeroed report, actuators untouched.
            reporter::report_humidity(link, 0.0);
            reporter::report_climate(
                link,
                &ClimateDecision {
                    temperature_c: 0.0,
                    cooling: false,
                    heating: false,
                },
            );
            return;
        }

        let reading = match hw.read() {
            Ok(r) => r,
            Err(e) => {
                // Transient miss: skip actuation and reporting, the next
                // tick retries naturally.
                debug!("climate: sensor read failed ({e}), skipping cycle");
                return;
            }
        };

        reporter::report_humidity(link, reading.humidity_pct);

        let (cooling, heating) = match self.classify(reading.temperature_c) {
            HvacAction::Cool => {
                info!("climate: {:.2} °C above comfort band, cooling on", reading.temperature_c);
                (true, false)
            }
            HvacAction::Heat => {
                info!("climate: {:.2} °C below comfort band, heating on", reading.temperature_c);
                (false, true)
            }
            HvacAction::AllOff => {
                info!("climate: {:.2} °C in comfort band, HVAC off", reading.temperature_c);
                (false, false)
            }
            HvacAction::Hold => return,
        };

        hw.set_indicator(Indicator::Cooling, cooling);
        hw.set_indicator(Indicator::Heating, heating);

        reporter::report_climate(
            link,
            &ClimateDecision {
                temperature_c: reading.temperature_c,
                cooling,
                heating,
            },
        );
    }
}
