//! Mock hardware and link adapters for integration tests.
//!
//! Records every actuator call and every sent frame so tests can assert
//! on the full history without touching real GPIO/PWM/BLE.

use std::collections::VecDeque;

use careclimate::app::ports::{
    ClimateReading, ClimateSensorPort, CurtainMotorPort, FrameLink, Indicator, IndicatorPort,
    LightSensorPort,
};
use careclimate::SensorError;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    SetCurtainAngle(i8),
    SetIndicator { which: Indicator, on: bool },
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    /// Next climate reading, or `Err` to simulate a sensor miss.
    pub climate: Result<ClimateReading, SensorError>,
    /// Scripted raw light samples; refilled by the test. When exhausted,
    /// `last_light` repeats.
    pub light_samples: VecDeque<u16>,
    last_light: u16,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            climate: Ok(ClimateReading {
                humidity_pct: 50.0,
                temperature_c: 20.0,
            }),
            light_samples: VecDeque::new(),
            last_light: 0,
        }
    }

    pub fn with_climate(humidity_pct: f32, temperature_c: f32) -> Self {
        let mut hw = Self::new();
        hw.climate = Ok(ClimateReading {
            humidity_pct,
            temperature_c,
        });
        hw
    }

    pub fn with_light_level(raw: u16) -> Self {
        let mut hw = Self::new();
        hw.last_light = raw;
        hw
    }

    /// Latest state commanded for an indicator, if any call touched it.
    pub fn indicator(&self, which: Indicator) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetIndicator { which: w, on } if *w == which => Some(*on),
            _ => None,
        })
    }

    /// Latest commanded curtain angle, if any.
    pub fn curtain_angle(&self) -> Option<i8> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetCurtainAngle(a) => Some(*a),
            _ => None,
        })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateSensorPort for MockHardware {
    fn read(&mut self) -> Result<ClimateReading, SensorError> {
        self.climate
    }
}

impl LightSensorPort for MockHardware {
    fn read_raw(&mut self) -> u16 {
        match self.light_samples.pop_front() {
            Some(raw) => {
                self.last_light = raw;
                raw
            }
            None => self.last_light,
        }
    }
}

impl IndicatorPort for MockHardware {
    fn set_indicator(&mut self, which: Indicator, on: bool) {
        self.calls.push(ActuatorCall::SetIndicator { which, on });
    }
}

impl CurtainMotorPort for MockHardware {
    fn set_curtain_angle(&mut self, degrees: i8) {
        self.calls.push(ActuatorCall::SetCurtainAngle(degrees));
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// Records outbound frames verbatim.
pub struct MockLink {
    pub frames: Vec<String>,
}

impl MockLink {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLink for MockLink {
    fn send(&mut self, frame: &str) {
        self.frames.push(frame.to_owned());
    }
}
