//! Integration tests for the control loops, reporter, and dispatcher.
//!
//! These run on the host (x86_64) and verify the full cycle from a tick
//! down to actuator calls and wire frames without any real hardware.

mod mock_hw;

mod climate_tests;
mod command_tests;
mod curtain_tests;
