//! Thin wrappers over `window.localStorage`. Storage may be unavailable (private
//! mode, disabled by policy); reads then return `None` and writes are dropped
//! with a warning.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        tracing::warn!(key, "local storage unavailable, value not persisted");
        return;
    };
    if storage.set_item(key, value).is_err() {
        tracing::warn!(key, "failed to persist value in local storage");
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
