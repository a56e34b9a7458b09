//! CareClimate Firmware — Main Entry Point
//!
//! Ports-and-adapters architecture with two cooperative control-loop tasks.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  ClimateHardware    CurtainHardware    BleLink               │
//! │  (DHT11+LEDs)       (ADC+servo)        (GATT in/out)         │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ───────────────         │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │  ClimateController · CurtainController             │      │
//! │  │  StatusReporter · CommandDispatcher · SystemState  │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  Timebase (esp_timer ×2) ──▶ wake signals ──▶ loop tasks     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use careclimate::adapters::ble_link::BleLink;
use careclimate::adapters::hardware::{ClimateHardware, CurtainHardware, PanelIndicators};
use careclimate::app::climate::ClimateController;
use careclimate::app::curtain::CurtainController;
use careclimate::app::dispatcher;
use careclimate::app::state::SYSTEM;
use careclimate::config::{SystemConfig, DEVICE_NAME};
use careclimate::drivers::servo::CurtainServo;
use careclimate::drivers::{hw_init, hw_timer};
use careclimate::pins;
use careclimate::sensors::dht::DhtSensor;
use careclimate::sensors::light::LightSensor;
use careclimate::wake::{CLIMATE_TICK, CURTAIN_TICK};

use edge_executor::LocalExecutor;

// ── Inbound command bridge ────────────────────────────────────
//
// Bluedroid hands every command-characteristic write to this function in
// its own task context. Only the shared atomic flag and stateless GPIO
// writes are touched, so no synchronisation with the loop tasks is needed.

fn on_ble_frame(data: &[u8]) {
    dispatcher::dispatch(&SYSTEM, &mut PanelIndicators::new(), data);
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("CareClimate v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // Curtain boots closed; the first enabled cycle takes over from there.
    let mut servo = CurtainServo::new();
    servo.move_to(config.closed_angle_deg);
    info!("curtain: driven to boot-closed position");

    // ── 3. Wireless link ──────────────────────────────────────
    BleLink::start(DEVICE_NAME, on_ble_frame);

    // ── 4. Per-loop hardware and controllers ──────────────────
    let climate_hw = ClimateHardware::new(DhtSensor::new(pins::DHT_DATA_GPIO));
    let curtain_hw = CurtainHardware::new(LightSensor::new(pins::LIGHT_ADC_GPIO), servo);

    let mut climate_ctrl = ClimateController::new(&config);
    let mut curtain_ctrl = CurtainController::new(&config);

    // ── 5. Control loop tasks ─────────────────────────────────
    let ex: LocalExecutor = LocalExecutor::default();

    ex.spawn(async move {
        let mut hw = climate_hw;
        let mut link = BleLink::new();
        loop {
            CLIMATE_TICK.wait().await;
            climate_ctrl.tick(&SYSTEM, &mut hw, &mut link);
        }
    })
    .detach();

    ex.spawn(async move {
        let mut hw = curtain_hw;
        let mut link = BleLink::new();
        loop {
            CURTAIN_TICK.wait().await;
            curtain_ctrl.tick(&SYSTEM, &mut hw, &mut link);
        }
    })
    .detach();

    // ── 6. Timebase ───────────────────────────────────────────
    hw_timer::start_timers(config.climate_period_us, config.curtain_period_us);

    info!("System ready. Entering control loops.");
    futures_lite::future::block_on(ex.run(futures_lite::future::pending::<()>()));

    Ok(())
}
