//! System configuration parameters.
//!
//! All tunable parameters for the CareClimate controller. Everything here
//! is a compile-time constant captured at boot — there is no runtime
//! threshold configuration and nothing is persisted.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Temperature thresholds (°C) ---
    /// Above this, cooling turns on
    pub high_temp_c: u16,
    /// At or below this (and at or above the heat threshold), both HVAC
    /// indicators are off
    pub low_temp_c: u16,
    /// Below this, heating turns on
    pub heat_temp_c: u16,

    // --- Light ---
    /// Lux level above which the curtain opens
    pub light_threshold_lux: u16,
    /// Fixed calibration divisor converting averaged raw counts to lux
    pub lux_divisor: u16,

    // --- Curtain servo angles (degrees) ---
    pub open_angle_deg: i8,
    pub closed_angle_deg: i8,

    // --- Timing ---
    /// Climate control loop period (microseconds)
    pub climate_period_us: u64,
    /// Curtain control loop period (microseconds)
    pub curtain_period_us: u64,
}

/// Advertised BLE device name.
pub const DEVICE_NAME: &str = "CareClimate";

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Temperature
            high_temp_c: 24,
            low_temp_c: 21,
            heat_temp_c: 18,

            // Light
            light_threshold_lux: 600,
            lux_divisor: 5,

            // Curtain
            open_angle_deg: 0,
            closed_angle_deg: -90,

            // Timing
            climate_period_us: 1_000_000, // 1 s
            curtain_period_us: 2_000_000, // 2 s
        }
    }
}
