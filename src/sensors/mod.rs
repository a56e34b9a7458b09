//! Sensor drivers.
//!
//! Each driver is dual-target: on ESP-IDF it talks to the real peripheral,
//! on host targets it reads injectable atomics so tests can script values.

pub mod dht;
pub mod light;
