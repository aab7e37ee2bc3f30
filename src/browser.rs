//! Browser Bindings
//!
//! `localStorage` persistence and the window's confirm/print dialogs.

use checklist_core::{HostEnvironment, PersistencePort, StoreError, StoreResult, STORAGE_KEY};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Completion map persisted in `window.localStorage`.
///
/// Looks the storage up on every call so the port holds no JS handles.
#[derive(Clone, Copy, Debug)]
pub struct LocalStoragePort {
    key: &'static str,
}

impl LocalStoragePort {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> StoreResult<Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl Default for LocalStoragePort {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl PersistencePort for LocalStoragePort {
    fn load(&self) -> StoreResult<Option<String>> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| StoreError::Unavailable(js_message(e)))
    }

    fn save(&self, value: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(self.key, value)
            .map_err(|e| StoreError::Write(js_message(e)))
    }

    fn clear(&self) -> StoreResult<()> {
        self.storage()?
            .remove_item(self.key)
            .map_err(|e| StoreError::Write(js_message(e)))
    }
}

/// `window.confirm` / `window.print`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl HostEnvironment for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn print(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("[PRINT] No window to print from");
            return;
        };
        if let Err(e) = window.print() {
            log::warn!("[PRINT] Print failed: {}", js_message(e));
        }
    }
}
