use crate::core::{MemoryStore, PreferenceStore};
use web_sys as web;

/// `localStorage` when the browser grants it, otherwise an in-memory map so
/// mode changes still work for the session.
pub enum BrowserPrefs {
    Local(web::Storage),
    Memory(MemoryStore),
}

impl BrowserPrefs {
    pub fn open(window: &web::Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => BrowserPrefs::Local(storage),
            Ok(None) => {
                log::warn!("[prefs] localStorage unavailable; mode will not persist");
                BrowserPrefs::Memory(MemoryStore::default())
            }
            Err(e) => {
                log::warn!("[prefs] localStorage error: {:?}", e);
                BrowserPrefs::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserPrefs {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserPrefs::Local(s) => s.get_item(key).ok().flatten(),
            BrowserPrefs::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            BrowserPrefs::Local(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("[prefs] failed to save {}: {:?}", key, e);
                }
            }
            BrowserPrefs::Memory(m) => m.set(key, value),
        }
    }
}
