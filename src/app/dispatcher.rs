//! Inbound command dispatcher.
//!
//! Invoked from the radio receive context whenever a frame arrives. Only
//! the first byte is inspected; length and trailing bytes are never
//! validated, and no acknowledgement goes back.

use log::info;

use super::ports::{Indicator, IndicatorPort};
use super::state::SystemState;

/// First byte of an enable frame.
pub const CMD_ENABLE: u8 = b'E';
/// First byte of a disable frame.
pub const CMD_DISABLE: u8 = b'A';

/// Apply one inbound frame to the shared state.
///
/// Unknown or empty frames are silently ignored.
pub fn dispatch(state: &SystemState, hw: &mut impl IndicatorPort, frame: &[u8]) {
    match frame.first() {
        Some(&CMD_ENABLE) => {
            state.enable();
            hw.set_indicator(Indicator::SystemOn, true);
            info!("command: system enabled");
        }
        Some(&CMD_DISABLE) => {
            state.disable();
            hw.set_indicator(Indicator::SystemOn, false);
            info!("command: system disabled");
        }
        _ => {}
    }
}
