//! Curtain servo driver (SG90-class, LEDC PWM).
//!
//! Angle is mapped linearly onto the standard 500–2500 µs pulse band over
//! −90°..+90°, at a 50 Hz frame (20 ms period). The LEDC channel runs at
//! 14-bit resolution, so one duty count is ~1.2 µs of pulse width.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC servo channel via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

const MIN_PULSE_US: i32 = 500;
const MAX_PULSE_US: i32 = 2500;
const FRAME_US: i32 = 20_000;
const ANGLE_SPAN_DEG: i32 = 180;

pub struct CurtainServo {
    current_angle: i8,
}

impl CurtainServo {
    pub fn new() -> Self {
        Self { current_angle: 0 }
    }

    /// Command the servo to an absolute angle in degrees (−90..=+90).
    pub fn move_to(&mut self, degrees: i8) {
        hw_init::ledc_set(hw_init::LEDC_CH_SERVO, Self::angle_to_counts(degrees));
        self.current_angle = degrees;
    }

    pub fn current_angle(&self) -> i8 {
        self.current_angle
    }

    /// Pulse width for the angle, expressed in LEDC duty counts.
    fn angle_to_counts(degrees: i8) -> u32 {
        let span = MAX_PULSE_US - MIN_PULSE_US;
        let pulse_us = MIN_PULSE_US + (i32::from(degrees) + 90) * span / ANGLE_SPAN_DEG;
        (pulse_us * (1 << pins::SERVO_PWM_RESOLUTION_BITS) / FRAME_US) as u32
    }
}
