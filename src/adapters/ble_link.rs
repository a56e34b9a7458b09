//! BLE wire link adapter.
//!
//! Implements [`FrameLink`] — outbound status frames go out as GATT
//! notifications; inbound command frames arrive through a write
//! characteristic and are handed to the registered inbound handler from
//! the Bluedroid callback context.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: Bluedroid BLE GATT server via raw
//!   `esp_idf_svc::sys` calls.
//! - **all other targets**: an in-memory stub that records sent frames.
//!
//! ## GATT Service Layout
//!
//! | Characteristic | UUID                      | Perms        |
//! |----------------|---------------------------|--------------|
//! | Status frames  | `6c9e0002-…-7b2d4f8a1c5e` | Read+Notify  |
//! | Command frames | `6c9e0003-…-7b2d4f8a1c5e` | Write        |

use log::info;

use crate::app::ports::FrameLink;

// ───────────────────────────────────────────────────────────────
// Constants
// ───────────────────────────────────────────────────────────────

pub const SERVICE_UUID: u128 = 0x6c9e0001_d3a8_4f72_b916_7b2d4f8a1c5e;
pub const CHAR_STATUS: u128 = 0x6c9e0002_d3a8_4f72_b916_7b2d4f8a1c5e;
pub const CHAR_COMMAND: u128 = 0x6c9e0003_d3a8_4f72_b916_7b2d4f8a1c5e;

/// Handler invoked with every inbound command frame, from the Bluedroid
/// callback context.
pub type InboundHandler = fn(&[u8]);

// ── ESP-IDF BLE static state ──────────────────────────────────
//
// Bluedroid callbacks are C function pointers that cannot capture Rust
// closures. These atomics bridge the callback context to the adapter.

#[cfg(target_os = "espidf")]
use core::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

#[cfg(target_os = "espidf")]
static BLE_GATTS_IF: AtomicU32 = AtomicU32::new(0);
#[cfg(target_os = "espidf")]
static BLE_CONN_ID: AtomicU32 = AtomicU32::new(0);
#[cfg(target_os = "espidf")]
static BLE_SVC_HANDLE: AtomicU32 = AtomicU32::new(0);
#[cfg(target_os = "espidf")]
static BLE_STATUS_CHAR_HANDLE: AtomicU32 = AtomicU32::new(0);
#[cfg(target_os = "espidf")]
static BLE_COMMAND_CHAR_HANDLE: AtomicU32 = AtomicU32::new(0);
#[cfg(target_os = "espidf")]
static BLE_CHAR_STEP: AtomicU32 = AtomicU32::new(0);

// GATTS callbacks run in the Bluedroid task (not ISR), so std Mutex is safe.
#[cfg(target_os = "espidf")]
static INBOUND_HANDLER: std::sync::Mutex<Option<InboundHandler>> = std::sync::Mutex::new(None);

#[cfg(target_os = "espidf")]
fn uuid128_to_esp(uuid: u128) -> esp_idf_svc::sys::esp_bt_uuid_t {
    let mut t: esp_idf_svc::sys::esp_bt_uuid_t = unsafe { core::mem::zeroed() };
    t.len = 16;
    unsafe {
        t.uuid.uuid128 = uuid.to_le_bytes();
    }
    t
}

#[cfg(target_os = "espidf")]
unsafe fn add_gatt_char(svc_handle: u16, uuid: u128, perm: u32, prop: u32) {
    use esp_idf_svc::sys::*;
    let mut char_uuid = uuid128_to_esp(uuid);
    unsafe {
        esp_ble_gatts_add_char(
            svc_handle,
            &mut char_uuid,
            perm as esp_gatt_perm_t,
            prop as esp_gatt_char_prop_t,
            core::ptr::null_mut(),
            core::ptr::null_mut(),
        );
    }
}

#[cfg(target_os = "espidf")]
unsafe fn start_advertising() {
    use esp_idf_svc::sys::*;
    // SAFETY: GAP API call with a fully-initialised parameter struct.
    unsafe {
        let mut adv_params = esp_ble_adv_params_t {
            adv_int_min: 0x20,
            adv_int_max: 0x40,
            adv_type: esp_ble_adv_type_t_ADV_TYPE_IND,
            own_addr_type: esp_ble_addr_type_t_BLE_ADDR_TYPE_PUBLIC,
            channel_map: esp_ble_adv_channel_t_ADV_CHNL_ALL,
            adv_filter_policy: esp_ble_adv_filter_t_ADV_FILTER_ALLOW_SCAN_ANY_CON_ANY,
            ..core::mem::zeroed()
        };
        esp_ble_gap_start_advertising(&mut adv_params);
    }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn ble_gap_event_handler(
    event: esp_idf_svc::sys::esp_gap_ble_cb_event_t,
    _param: *mut esp_idf_svc::sys::esp_ble_gap_cb_param_t,
) {
    use esp_idf_svc::sys::*;
    match event {
        esp_gap_ble_cb_event_t_ESP_GAP_BLE_ADV_START_COMPLETE_EVT => {
            log::info!("BLE GAP: advertising started");
        }
        esp_gap_ble_cb_event_t_ESP_GAP_BLE_ADV_STOP_COMPLETE_EVT => {
            log::info!("BLE GAP: advertising stopped");
        }
        _ => {}
    }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn ble_gatts_event_handler(
    event: esp_idf_svc::sys::esp_gatts_cb_event_t,
    gatts_if: esp_idf_svc::sys::esp_gatt_if_t,
    param: *mut esp_idf_svc::sys::esp_ble_gatts_cb_param_t,
) {
    use esp_idf_svc::sys::*;

    BLE_GATTS_IF.store(gatts_if as u32, AtomicOrdering::Relaxed);

    match event {
        esp_gatts_cb_event_t_ESP_GATTS_REG_EVT => {
            log::info!("BLE GATTS: app registered (if={})", gatts_if);
            let svc_uuid = uuid128_to_esp(SERVICE_UUID);
            let mut svc_id = esp_gatt_srvc_id_t {
                id: esp_gatt_id_t {
                    uuid: svc_uuid,
                    inst_id: 0,
                },
                is_primary: true,
            };
            unsafe {
                esp_ble_gatts_create_service(gatts_if, &mut svc_id, 8);
            }
        }
        esp_gatts_cb_event_t_ESP_GATTS_CREATE_EVT => {
            let p = unsafe { &(*param).create };
            let svc_handle = p.service_handle;
            BLE_SVC_HANDLE.store(svc_handle as u32, AtomicOrdering::Relaxed);
            log::info!("BLE GATTS: service created (handle={})", svc_handle);
            unsafe {
                esp_ble_gatts_start_service(svc_handle);
                BLE_CHAR_STEP.store(1, AtomicOrdering::Relaxed);
                add_gatt_char(
                    svc_handle,
                    CHAR_STATUS,
                    ESP_GATT_PERM_READ,
                    ESP_GATT_CHAR_PROP_BIT_READ | ESP_GATT_CHAR_PROP_BIT_NOTIFY,
                );
            }
        }
        esp_gatts_cb_event_t_ESP_GATTS_ADD_CHAR_EVT => {
            let p = unsafe { &(*param).add_char };
            let handle = p.attr_handle;
            let svc_handle = BLE_SVC_HANDLE.load(AtomicOrdering::Relaxed) as u16;
            match BLE_CHAR_STEP.load(AtomicOrdering::Relaxed) {
                1 => {
                    BLE_STATUS_CHAR_HANDLE.store(handle as u32, AtomicOrdering::Relaxed);
                    log::info!("BLE GATTS: status char (handle={})", handle);
                    BLE_CHAR_STEP.store(2, AtomicOrdering::Relaxed);
                    unsafe {
                        add_gatt_char(
                            svc_handle,
                            CHAR_COMMAND,
                            ESP_GATT_PERM_WRITE,
                            ESP_GATT_CHAR_PROP_BIT_WRITE | ESP_GATT_CHAR_PROP_BIT_WRITE_NR,
                        );
                    }
                }
                2 => {
                    BLE_COMMAND_CHAR_HANDLE.store(handle as u32, AtomicOrdering::Relaxed);
                    BLE_CHAR_STEP.store(3, AtomicOrdering::Relaxed);
                    log::info!("BLE GATTS: command char (handle={}) — all registered", handle);
                }
                _ => {}
            }
        }
        esp_gatts_cb_event_t_ESP_GATTS_CONNECT_EVT => {
            let p = unsafe { &(*param).connect };
            BLE_CONN_ID.store(u32::from(p.conn_id), AtomicOrdering::Relaxed);
            log::info!("BLE GATTS: client connected (conn_id={})", p.conn_id);
        }
        esp_gatts_cb_event_t_ESP_GATTS_DISCONNECT_EVT => {
            BLE_CONN_ID.store(0, AtomicOrdering::Relaxed);
            log::info!("BLE GATTS: client disconnected");
            // Restart advertising after disconnect.
            unsafe {
                start_advertising();
            }
        }
        esp_gatts_cb_event_t_ESP_GATTS_WRITE_EVT => {
            let p = unsafe { &(*param).write };
            if p.handle as u32 == BLE_COMMAND_CHAR_HANDLE.load(AtomicOrdering::Relaxed) {
                let data = unsafe { core::slice::from_raw_parts(p.value, p.len as usize) };
                if let Ok(handler) = INBOUND_HANDLER.lock() {
                    if let Some(h) = *handler {
                        h(data);
                    }
                }
            }
        }
        _ => {}
    }
}

// ───────────────────────────────────────────────────────────────
// BleLink adapter
// ───────────────────────────────────────────────────────────────

/// Outbound half of the wireless link. Construct one per sending context;
/// all instances notify through the same GATT characteristic.
pub struct BleLink {
    #[cfg(not(target_os = "espidf"))]
    sent: Vec<String>,
}

impl BleLink {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            sent: Vec::new(),
        }
    }

    /// Bring up the Bluedroid stack, register the GATT service, and start
    /// advertising. `on_receive` is invoked for every inbound command
    /// frame. Call once at boot.
    #[cfg(target_os = "espidf")]
    pub fn start(device_name: &str, on_receive: InboundHandler) {
        use esp_idf_svc::sys::*;

        if let Ok(mut handler) = INBOUND_HANDLER.lock() {
            *handler = Some(on_receive);
        }

        // SAFETY: one-shot stack bring-up from the main task, before the
        // control loops start.
        unsafe {
            // Release classic BT memory (BLE-only mode saves ~30 KB).
            esp_bt_controller_mem_release(esp_bt_mode_t_ESP_BT_MODE_CLASSIC_BT);

            let mut bt_cfg = esp_bt_controller_config_t::default();
            let ret = esp_bt_controller_init(&mut bt_cfg);
            if ret != ESP_OK as i32 {
                log::error!("BLE: bt_controller_init failed ({}) — link disabled", ret);
                return;
            }
            let ret = esp_bt_controller_enable(esp_bt_mode_t_ESP_BT_MODE_BLE);
            if ret != ESP_OK as i32 {
                log::error!("BLE: bt_controller_enable failed ({}) — link disabled", ret);
                return;
            }
            if esp_bluedroid_init() != ESP_OK as i32 || esp_bluedroid_enable() != ESP_OK as i32 {
                log::error!("BLE: bluedroid bring-up failed — link disabled");
                return;
            }

            esp_ble_gap_register_callback(Some(ble_gap_event_handler));
            esp_ble_gatts_register_callback(Some(ble_gatts_event_handler));
            esp_ble_gatts_app_register(0);

            let mut name: heapless::Vec<u8, 32> = heapless::Vec::new();
            let _ = name.extend_from_slice(device_name.as_bytes());
            let _ = name.push(0);
            esp_ble_gap_set_device_name(name.as_ptr() as *const _);

            start_advertising();
        }

        info!("BLE(espidf): stack initialized, advertising as '{}'", device_name);
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn start(device_name: &str, _on_receive: InboundHandler) {
        info!(
            "BLE(sim): advertising '{}' (service {:032x})",
            device_name, SERVICE_UUID
        );
    }

    /// Frames recorded by the sim stub, oldest first.
    #[cfg(not(target_os = "espidf"))]
    pub fn sent_frames(&self) -> &[String] {
        &self.sent
    }
}

impl Default for BleLink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLink for BleLink {
    #[cfg(target_os = "espidf")]
    fn send(&mut self, frame: &str) {
        use esp_idf_svc::sys::*;
        let handle = BLE_STATUS_CHAR_HANDLE.load(AtomicOrdering::Relaxed);
        let conn = BLE_CONN_ID.load(AtomicOrdering::Relaxed);
        if handle == 0 || conn == 0 {
            // No subscriber — best-effort link, frame dropped.
            return;
        }
        // SAFETY: handles were recorded by the GATTS callback; the payload
        // pointer is only read for the duration of the call.
        unsafe {
            esp_ble_gatts_send_indicate(
                BLE_GATTS_IF.load(AtomicOrdering::Relaxed) as u8,
                conn as u16,
                handle as u16,
                frame.len() as u16,
                frame.as_ptr() as *mut u8,
                false,
            );
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn send(&mut self, frame: &str) {
        self.sent.push(frame.to_owned());
    }
}
