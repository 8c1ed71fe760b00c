use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "ti_settings";

/// View toggles, persisted to localStorage across sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub show_predictions: bool,
    pub show_ghost: bool,
    pub show_info: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_predictions: true,
            show_ghost: true,
            show_info: true,
        }
    }
}

impl ViewSettings {
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    if let Ok(settings) = serde_json::from_str(&raw) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = store.set_item(SETTINGS_KEY, &raw);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything() {
        let s = ViewSettings::default();
        assert!(s.show_predictions && s.show_ghost && s.show_info);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let s = ViewSettings {
            show_predictions: false,
            show_ghost: true,
            show_info: false,
        };
        let raw = serde_json::to_string(&s).unwrap();
        let back: ViewSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, s);
    }
}
