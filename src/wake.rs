//! Per-loop wake signals.
//!
//! Each control loop suspends on its own single-slot signal, set by the
//! matching periodic timer callback:
//!
//! ```text
//! ┌──────────────┐      ┌──────────────┐      ┌────────────────────┐
//! │ 1 s timer cb │─────▶│ CLIMATE_TICK │─────▶│ climate loop task  │
//! │ 2 s timer cb │─────▶│ CURTAIN_TICK │─────▶│ curtain loop task  │
//! └──────────────┘      └──────────────┘      └────────────────────┘
//! ```
//!
//! `Signal` holds at most one pending wake: a tick that fires while the
//! loop is still mid-cycle overwrites the slot rather than queueing, so the
//! loop runs one extra iteration at most, never a backlog of them.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Wakes the climate control loop. Set from the 1 s timer callback.
pub static CLIMATE_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Wakes the curtain control loop. Set from the 2 s timer callback.
pub static CURTAIN_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();
