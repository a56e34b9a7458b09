//! Hardware adapters — bridge real peripherals to the domain port traits.
//!
//! Each control loop owns its own adapter for the lifetime of the process,
//! so there is no cross-loop contention on a sensor or actuator. The
//! command dispatcher gets a third, indicator-only adapter because it runs
//! in the radio callback context. On non-espidf targets the underlying
//! drivers use cfg-gated simulation stubs.

use crate::app::ports::{
    ClimateReading, ClimateSensorPort, CurtainMotorPort, Indicator, IndicatorPort,
    LightSensorPort,
};
use crate::drivers::indicator::{IndicatorLights, Led};
use crate::drivers::servo::CurtainServo;
use crate::error::SensorError;
use crate::sensors::dht::DhtSensor;
use crate::sensors::light::LightSensor;

fn led_for(which: Indicator) -> Led {
    match which {
        Indicator::SystemOn => Led::System,
        Indicator::Cooling => Led::Cooling,
        Indicator::Heating => Led::Heating,
    }
}

// ── Climate loop hardware ─────────────────────────────────────

/// Peripheral set owned by the climate loop: the DHT11 and the HVAC
/// indicator LEDs.
pub struct ClimateHardware {
    dht: DhtSensor,
    lights: IndicatorLights,
}

impl ClimateHardware {
    pub fn new(dht: DhtSensor) -> Self {
        Self {
            dht,
            lights: IndicatorLights::new(),
        }
    }
}

impl ClimateSensorPort for ClimateHardware {
    fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let r = self.dht.read()?;
        Ok(ClimateReading {
            humidity_pct: r.humidity_pct,
            temperature_c: r.temperature_c,
        })
    }
}

impl IndicatorPort for ClimateHardware {
    fn set_indicator(&mut self, which: Indicator, on: bool) {
        self.lights.set(led_for(which), on);
    }
}

// ── Curtain loop hardware ─────────────────────────────────────

/// Peripheral set owned by the curtain loop: the light ADC and the servo.
pub struct CurtainHardware {
    light: LightSensor,
    servo: CurtainServo,
}

impl CurtainHardware {
    pub fn new(light: LightSensor, servo: CurtainServo) -> Self {
        Self { light, servo }
    }

    /// Last commanded servo angle (boot position until the first cycle).
    pub fn curtain_angle(&self) -> i8 {
        self.servo.current_angle()
    }
}

impl LightSensorPort for CurtainHardware {
    fn read_raw(&mut self) -> u16 {
        self.light.read_raw()
    }
}

impl CurtainMotorPort for CurtainHardware {
    fn set_curtain_angle(&mut self, degrees: i8) {
        self.servo.move_to(degrees);
    }
}

// ── Command dispatcher hardware ───────────────────────────────

/// Indicator-only adapter for the command dispatcher. The underlying GPIO
/// writes are stateless, so a separate instance per context is safe.
pub struct PanelIndicators {
    lights: IndicatorLights,
}

impl PanelIndicators {
    pub fn new() -> Self {
        Self {
            lights: IndicatorLights::new(),
        }
    }
}

impl Default for PanelIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorPort for PanelIndicators {
    fn set_indicator(&mut self, which: Indicator, on: bool) {
        self.lights.set(led_for(which), on);
    }
}
