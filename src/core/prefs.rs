use super::color::ColorMode;
use super::constants::MODE_PREF_KEY;
use std::collections::HashMap;

/// String key/value store that survives between sessions.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Best-effort write; failures are the implementation's to log.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Used in tests and when the browser has no storage.
#[derive(Default, Clone, Debug)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Absent or unrecognized values yield rainbow.
pub fn load_color_mode<P: PreferenceStore + ?Sized>(store: &P) -> ColorMode {
    store
        .get(MODE_PREF_KEY)
        .map(|v| ColorMode::from_name(&v))
        .unwrap_or_default()
}

pub fn save_color_mode<P: PreferenceStore + ?Sized>(store: &mut P, mode: ColorMode) {
    store.set(MODE_PREF_KEY, mode.name());
}
