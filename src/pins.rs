//! GPIO / peripheral pin assignments for the CareClimate board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Combined humidity/temperature sensor (DHT11, single-wire)
// ---------------------------------------------------------------------------

/// Bidirectional data line. Open-drain with external pull-up.
pub const DHT_DATA_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// Ambient light sensor (LDR divider, analog)
// ---------------------------------------------------------------------------

/// LDR voltage divider — ADC1 channel 2 (GPIO 3 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Curtain servo (SG90-class)
// ---------------------------------------------------------------------------

/// LEDC PWM output to the servo signal line.
pub const SERVO_PWM_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete, active HIGH)
// ---------------------------------------------------------------------------

/// Lit while the system is enabled.
pub const LED_SYSTEM_GPIO: i32 = 11;
/// Lit while cooling is commanded.
pub const LED_COOLING_GPIO: i32 = 12;
/// Lit while heating is commanded.
pub const LED_HEATING_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC resolution for the servo channel. 14-bit gives ~1.2 µs steps at 50 Hz.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;
/// Standard hobby-servo frame rate.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
