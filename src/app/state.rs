//! Process-wide enable flag.
//!
//! Written only by the command dispatcher (radio callback context), read by
//! both control loops at the top of every cycle. A single `AtomicBool` with
//! `Relaxed` ordering: the writer always stores a fully-formed value, and a
//! reader observes at most one stale value per cycle before the next read
//! picks up the change. No lock is needed or wanted here.

use core::sync::atomic::{AtomicBool, Ordering};

/// The device-wide instance. Lives for the whole uptime; tests construct
/// their own [`SystemState`] values instead of touching this one.
pub static SYSTEM: SystemState = SystemState::new();

/// Shared enable/disable state for the whole controller.
#[derive(Debug)]
pub struct SystemState {
    enabled: AtomicBool,
}

impl SystemState {
    /// A new state, disabled — the power-on default.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}
