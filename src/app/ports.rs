//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, the radio link) implement these
//! traits. The controllers consume them via generics, so the domain core
//! never touches hardware directly.

use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One combined reading from the humidity/temperature sensor.
#[derive(Debug, Clone, Copy)]
pub struct ClimateReading {
    pub humidity_pct: f32,
    pub temperature_c: f32,
}

/// Read-side port for the climate loop's sensor.
///
/// An `Err` is a transient miss: the caller skips the cycle and the next
/// tick retries naturally. No retry happens inside the port.
pub trait ClimateSensorPort {
    fn read(&mut self) -> Result<ClimateReading, SensorError>;
}

/// Read-side port for the curtain loop's light sensor.
///
/// One raw ADC sample per call. The port never fails; out-of-range counts
/// are passed through unvalidated.
pub trait LightSensorPort {
    fn read_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────
//
// The actuator side is split by owning context: the climate loop and the
// command dispatcher drive indicators, the curtain loop drives the motor.
// Each context holds its own adapter, so no actuator is shared across
// loops. All calls are fire-and-forget and assumed to succeed.

/// Indicator LEDs on the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// System enabled (driven by the command dispatcher).
    SystemOn,
    /// Cooling commanded.
    Cooling,
    /// Heating commanded.
    Heating,
}

/// Write-side port for the indicator LEDs.
pub trait IndicatorPort {
    /// Switch an indicator LED on or off.
    fn set_indicator(&mut self, which: Indicator, on: bool);
}

/// Write-side port for the curtain motor.
pub trait CurtainMotorPort {
    /// Move the curtain servo to the given angle in degrees.
    fn set_curtain_angle(&mut self, degrees: i8);
}

// ───────────────────────────────────────────────────────────────
// Wire link port (driven adapter: domain → radio)
// ───────────────────────────────────────────────────────────────

/// Outbound side of the wireless link.
///
/// One ASCII status frame per call, best-effort: no delivery status is
/// reported back and none is consumed by the domain.
pub trait FrameLink {
    fn send(&mut self, frame: &str);
}
