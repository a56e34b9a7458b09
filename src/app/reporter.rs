//! Status reporter — stateless encoder for the outbound ASCII protocol.
//!
//! Every frame is delimited by a leading and trailing `*`; some carry an
//! embedded `\n` before the closing `*`. The byte sequences are a fixed
//! wire format shared with existing receivers and must not change:
//!
//! | Frame          | Format            |
//! |----------------|-------------------|
//! | Temperature    | `*T<u>*`          |
//! | Cooling state  | `*S ENCENDIDO\n*` / `*S APAGADO\n*` |
//! | Heating state  | `*C ENCENDIDA\n*` / `*C APAGADA\n*` |
//! | Humidity       | `*H<u>%*` then `*I<u>*` |
//! | Light level    | `*L <u>\n*`       |
//! | Curtain state  | `*M ABIERTA\n*` / `*M CERRADA\n*` |
//!
//! Numeric values are unsigned integers, truncated. Each frame goes out as
//! its own [`FrameLink::send`]; ordering within one decision is fixed, and
//! no acknowledgement is awaited.

use core::fmt::Write;

use heapless::String;

use super::ports::FrameLink;

const FRAME_CAP: usize = 16;

const COOLING_ON: &str = "*S ENCENDIDO\n*";
const COOLING_OFF: &str = "*S APAGADO\n*";
const HEATING_ON: &str = "*C ENCENDIDA\n*";
const HEATING_OFF: &str = "*C APAGADA\n*";
const CURTAIN_OPEN: &str = "*M ABIERTA\n*";
const CURTAIN_CLOSED: &str = "*M CERRADA\n*";

/// Outcome of one climate cycle, handed to the reporter and dropped.
#[derive(Debug, Clone, Copy)]
pub struct ClimateDecision {
    pub temperature_c: f32,
    pub cooling: bool,
    pub heating: bool,
}

/// Outcome of one curtain cycle.
#[derive(Debug, Clone, Copy)]
pub struct CurtainDecision {
    pub lux: u16,
    pub open: bool,
}

/// Send the temperature and both HVAC state frames, in that order.
pub fn report_climate(link: &mut impl FrameLink, decision: &ClimateDecision) {
    let mut frame: String<FRAME_CAP> = String::new();
    // Infallible: "*T65535*" is 8 bytes, well under FRAME_CAP.
    let _ = write!(frame, "*T{}*", decision.temperature_c as u16);
    link.send(&frame);

    link.send(if decision.cooling { COOLING_ON } else { COOLING_OFF });
    link.send(if decision.heating { HEATING_ON } else { HEATING_OFF });
}

/// Send both humidity frames (`*H..%*` then `*I..*`).
pub fn report_humidity(link: &mut impl FrameLink, humidity_pct: f32) {
    let h = humidity_pct as u16;

    let mut frame: String<FRAME_CAP> = String::new();
    let _ = write!(frame, "*H{h}%*");
    link.send(&frame);

    frame.clear();
    let _ = write!(frame, "*I{h}*");
    link.send(&frame);
}

/// Send the light level and curtain state frames, in that order.
pub fn report_curtain(link: &mut impl FrameLink, decision: &CurtainDecision) {
    let mut frame: String<FRAME_CAP> = String::new();
    let _ = write!(frame, "*L {}\n*", decision.lux);
    link.send(&frame);

    link.send(if decision.open { CURTAIN_OPEN } else { CURTAIN_CLOSED });
}
