//! Persisted user preferences.
//!
//! Three independent flags stored in eframe's key-value storage. They have
//! OS-default lifecycle: loaded on startup, written back whenever eframe
//! saves, no explicit init or teardown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Dark color scheme.
    pub dark_mode: bool,

    /// Read fetched jokes aloud.
    pub voice_enabled: bool,

    /// Index into `Category::ALL` for the picker. Out-of-range values fall
    /// back to the first category on use.
    pub category_index: usize,
}

impl Preferences {
    /// Load stored preferences, falling back to defaults when missing or
    /// unreadable.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default()
    }

    /// Persist preferences.
    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let prefs = Preferences::default();
        assert!(!prefs.dark_mode);
        assert!(!prefs.voice_enabled);
        assert_eq!(prefs.category_index, 0);
    }

    #[test]
    fn serde_round_trip() {
        let prefs = Preferences {
            dark_mode: true,
            voice_enabled: true,
            category_index: 7,
        };

        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Preferences = serde_json::from_str(r#"{"dark_mode":true}"#).unwrap();
        assert!(back.dark_mode);
        assert!(!back.voice_enabled);
        assert_eq!(back.category_index, 0);
    }

    #[test]
    fn load_without_storage_is_default() {
        assert_eq!(Preferences::load(None), Preferences::default());
    }
}
