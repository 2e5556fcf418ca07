//! Settings persistence coordination.
//!
//! Persists serializable settings (today: the background configuration) to
//! eframe's storage as JSON strings.

use folio::BackgroundConfig;
use serde::{Deserialize, Serialize};

const BACKGROUND_CONFIG_KEY: &str = "background_config";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Missing keys and unparsable values both yield `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring unreadable setting");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }

    /// Loads the background configuration, clamped to usable ranges.
    pub fn load_background_config(storage: Option<&dyn eframe::Storage>) -> BackgroundConfig {
        Self::load_setting_or(storage, BACKGROUND_CONFIG_KEY, BackgroundConfig::default()).sanitized()
    }

    pub fn save_background_config(storage: &mut dyn eframe::Storage, config: &BackgroundConfig) {
        Self::save_setting(storage, BACKGROUND_CONFIG_KEY, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_background_config_round_trip() {
        let mut storage = MockStorage::default();
        let config = BackgroundConfig {
            seed: Some(42),
            particle_count: 12,
            ..BackgroundConfig::default()
        };
        SettingsCoordinator::save_background_config(&mut storage, &config);
        assert_eq!(SettingsCoordinator::load_background_config(Some(&storage)), config);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(SettingsCoordinator::load_background_config(None), BackgroundConfig::default());
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::default();
        storage.data.insert(BACKGROUND_CONFIG_KEY.to_string(), "{not json".to_string());
        assert_eq!(SettingsCoordinator::load_background_config(Some(&storage)), BackgroundConfig::default());
    }

    #[test]
    fn test_stored_config_is_sanitized() {
        let mut storage = MockStorage::default();
        storage
            .data
            .insert(BACKGROUND_CONFIG_KEY.to_string(), r#"{"particle_count": 99999}"#.to_string());
        let config = SettingsCoordinator::load_background_config(Some(&storage));
        assert_eq!(config.particle_count, folio::config::MAX_PARTICLES);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::default();
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "test", &123i32);
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(123));
    }
}
