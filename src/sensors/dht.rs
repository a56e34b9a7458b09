//! DHT11 combined humidity/temperature sensor (single-wire, bit-banged).
//!
//! The sensor answers a >18 ms low start pulse with an 80 µs low + 80 µs
//! high preamble, then clocks out 40 bits (humidity int/dec, temperature
//! int/dec, checksum). Bit value is encoded in the high-phase width:
//! ~26 µs = 0, ~70 µs = 1.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the data GPIO with busy-wait timing.
//! On host/test: reads from static atomics for injection.

use core::sync::atomic::{AtomicBool, AtomicU16};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::pins;

static SIM_HUMIDITY_X10: AtomicU16 = AtomicU16::new(0);
static SIM_TEMP_X10: AtomicU16 = AtomicU16::new(0);
static SIM_READ_FAILS: AtomicBool = AtomicBool::new(false);

/// Inject the next reading for host tests (tenths resolution).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_climate(humidity_pct: f32, temperature_c: f32) {
    SIM_HUMIDITY_X10.store((humidity_pct * 10.0) as u16, Ordering::Relaxed);
    SIM_TEMP_X10.store((temperature_c * 10.0) as u16, Ordering::Relaxed);
}

/// Make subsequent host reads fail with [`SensorError::NoResponse`].
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_read_failure(fails: bool) {
    SIM_READ_FAILS.store(fails, Ordering::Relaxed);
}

/// One decoded sensor frame.
#[derive(Debug, Clone, Copy)]
pub struct DhtReading {
    pub humidity_pct: f32,
    pub temperature_c: f32,
}

pub struct DhtSensor {
    _data_gpio: i32,
}

impl DhtSensor {
    pub fn new(data_gpio: i32) -> Self {
        Self {
            _data_gpio: data_gpio,
        }
    }

    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> Result<DhtReading, SensorError> {
        let frame = self.read_frame()?;

        let checksum = frame[0]
            .wrapping_add(frame[1])
            .wrapping_add(frame[2])
            .wrapping_add(frame[3]);
        if checksum != frame[4] {
            return Err(SensorError::ChecksumMismatch);
        }

        Ok(DhtReading {
            humidity_pct: f32::from(frame[0]) + f32::from(frame[1]) / 10.0,
            temperature_c: f32::from(frame[2]) + f32::from(frame[3]) / 10.0,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> Result<DhtReading, SensorError> {
        if SIM_READ_FAILS.load(Ordering::Relaxed) {
            return Err(SensorError::NoResponse);
        }
        Ok(DhtReading {
            humidity_pct: f32::from(SIM_HUMIDITY_X10.load(Ordering::Relaxed)) / 10.0,
            temperature_c: f32::from(SIM_TEMP_X10.load(Ordering::Relaxed)) / 10.0,
        })
    }

    /// Clock in the raw 5-byte frame from the data line.
    #[cfg(target_os = "espidf")]
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        use esp_idf_svc::sys::{
            esp_rom_delay_us, gpio_mode_t_GPIO_MODE_INPUT, gpio_mode_t_GPIO_MODE_OUTPUT_OD,
            gpio_set_direction, gpio_set_level,
        };

        let pin = pins::DHT_DATA_GPIO;

        // Start pulse: hold the line low for 20 ms, then release.
        // SAFETY: raw register access on a pin configured in hw_init;
        // called only from the climate loop task.
        unsafe {
            gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_OUTPUT_OD);
            gpio_set_level(pin, 0);
            esp_rom_delay_us(20_000);
            gpio_set_level(pin, 1);
            gpio_set_direction(pin, gpio_mode_t_GPIO_MODE_INPUT);
        }

        // Preamble: sensor pulls low ~80 µs then high ~80 µs.
        wait_for_level(pin, false, 60).ok_or(SensorError::NoResponse)?;
        wait_for_level(pin, true, 100).ok_or(SensorError::NoResponse)?;
        wait_for_level(pin, false, 100).ok_or(SensorError::NoResponse)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            // 50 µs low gap, then the width of the high phase encodes the bit.
            wait_for_level(pin, true, 80).ok_or(SensorError::Timeout)?;
            let high_us = wait_for_level(pin, false, 100).ok_or(SensorError::Timeout)?;
            if high_us > 40 {
                frame[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
        Ok(frame)
    }
}

/// Busy-wait until the line reaches `level`, up to `timeout_us`.
/// Returns the elapsed microseconds, or `None` on timeout.
#[cfg(target_os = "espidf")]
fn wait_for_level(pin: i32, level: bool, timeout_us: u32) -> Option<u32> {
    use esp_idf_svc::sys::{esp_timer_get_time, gpio_get_level};

    let want = i32::from(level);
    // SAFETY: esp_timer_get_time and gpio_get_level are read-only calls.
    let start = unsafe { esp_timer_get_time() };
    loop {
        if unsafe { gpio_get_level(pin) } == want {
            return Some((unsafe { esp_timer_get_time() } - start) as u32);
        }
        if (unsafe { esp_timer_get_time() } - start) as u32 > timeout_us {
            return None;
        }
    }
}
