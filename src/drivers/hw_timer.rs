//! Hardware timebase using ESP-IDF's esp_timer API.
//!
//! Two periodic timers, one per control loop, whose callbacks set the
//! matching single-slot wake signal. Callbacks execute in the ESP timer
//! task context (not ISR), so signaling is safe there.
//!
//! On simulation targets the timers are not started; tests drive the loop
//! bodies directly.

#[cfg(target_os = "espidf")]
use crate::wake::{CLIMATE_TICK, CURTAIN_TICK};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut CLIMATE_TIMER: esp_timer_handle_t = core::ptr::null_mut();
#[cfg(target_os = "espidf")]
static mut CURTAIN_TIMER: esp_timer_handle_t = core::ptr::null_mut();

/// SAFETY: CLIMATE_TIMER is written once in `start_timers()` before any
/// timer callbacks fire. Only called from the single main task.
#[cfg(target_os = "espidf")]
unsafe fn climate_timer() -> esp_timer_handle_t {
    unsafe { CLIMATE_TIMER }
}

/// SAFETY: Same invariants as `climate_timer()`.
#[cfg(target_os = "espidf")]
unsafe fn curtain_timer() -> esp_timer_handle_t {
    unsafe { CURTAIN_TIMER }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn climate_tick_cb(_arg: *mut core::ffi::c_void) {
    CLIMATE_TICK.signal(());
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn curtain_tick_cb(_arg: *mut core::ffi::c_void) {
    CURTAIN_TICK.signal(());
}

/// Start both periodic tick timers.
#[cfg(target_os = "espidf")]
pub fn start_timers(climate_period_us: u64, curtain_period_us: u64) {
    // SAFETY: CLIMATE_TIMER and CURTAIN_TIMER are written here once at
    // boot from the single main-task context before any callbacks fire.
    // The callbacks themselves only set the wake signals.
    unsafe {
        let climate_args = esp_timer_create_args_t {
            callback: Some(climate_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"climate\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&climate_args, &raw mut CLIMATE_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: climate timer create failed (rc={}) — continuing without climate ticks", ret);
            return;
        }
        let ret = esp_timer_start_periodic(CLIMATE_TIMER, climate_period_us);
        if ret != ESP_OK {
            log::error!("hw_timer: climate timer start failed (rc={})", ret);
            return;
        }

        let curtain_args = esp_timer_create_args_t {
            callback: Some(curtain_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"curtain\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&curtain_args, &raw mut CURTAIN_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: curtain timer create failed (rc={}) — continuing without curtain ticks", ret);
            return;
        }
        let ret = esp_timer_start_periodic(CURTAIN_TIMER, curtain_period_us);
        if ret != ESP_OK {
            log::error!("hw_timer: curtain timer start failed (rc={})", ret);
            return;
        }

        info!(
            "hw_timer: climate@{}µs + curtain@{}µs started",
            climate_period_us, curtain_period_us
        );
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timers(_climate_period_us: u64, _curtain_period_us: u64) {
    log::info!("hw_timer(sim): timers not started (ticks driven by tests)");
}

/// Stop both tick timers.
#[cfg(target_os = "espidf")]
pub fn stop_timers() {
    // SAFETY: handles are valid if start_timers() succeeded; null-check
    // prevents double-free.
    unsafe {
        // SAFETY: climate_timer()/curtain_timer() contract — main task only.
        let ct = climate_timer();
        if !ct.is_null() {
            esp_timer_stop(ct);
        }
        let cu = curtain_timer();
        if !cu.is_null() {
            esp_timer_stop(cu);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_timers() {}
