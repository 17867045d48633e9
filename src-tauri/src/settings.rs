use serde::{Deserialize, Serialize};
use serde_json::Value;
use tauri::{AppHandle, Runtime};
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::error::RelayError;

pub const SETTINGS_STORE: &str = "settings.json";

pub const KEY_CONNECTION_STRING: &str = "connection_string";
pub const KEY_SEND_INTERVAL: &str = "send_interval";
pub const KEY_DISPLAY_STATUS_ICON: &str = "display_status_icon";

pub const DEFAULT_SEND_INTERVAL: u64 = 10;

/// Relay configuration edited from the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaySettings {
    /// IoT Hub device connection string; empty means unconfigured
    pub connection_string: String,
    /// Seconds between telemetry messages
    pub send_interval: u64,
    /// Whether the navbar indicator is shown
    pub display_status_icon: bool,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            send_interval: DEFAULT_SEND_INTERVAL,
            display_status_icon: true,
        }
    }
}

impl RelaySettings {
    /// Build settings from stored values, falling back to defaults for
    /// missing or mistyped keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<Value>,
    {
        let defaults = Self::default();

        let connection_string = lookup(KEY_CONNECTION_STRING)
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or(defaults.connection_string);

        // Number or numeric string
        let send_interval = lookup(KEY_SEND_INTERVAL)
            .and_then(|v| match v {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .filter(|n| *n > 0)
            .unwrap_or(defaults.send_interval);

        let display_status_icon = lookup(KEY_DISPLAY_STATUS_ICON)
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.display_status_icon);

        Self {
            connection_string,
            send_interval,
            display_status_icon,
        }
    }

    pub fn to_entries(&self) -> Vec<(&'static str, Value)> {
        vec![
            (KEY_CONNECTION_STRING, Value::from(self.connection_string.clone())),
            (KEY_SEND_INTERVAL, Value::from(self.send_interval)),
            (KEY_DISPLAY_STATUS_ICON, Value::from(self.display_status_icon)),
        ]
    }

    pub fn is_configured(&self) -> bool {
        !self.connection_string.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), RelayError> {
        if self.send_interval == 0 {
            return Err(RelayError::Config(
                "Send interval must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load<R: Runtime>(app: &AppHandle<R>) -> Result<Self, RelayError> {
        let store = app.store(SETTINGS_STORE).map_err(|e| {
            warn!("Failed to open store: {}", e);
            RelayError::Store(e.to_string())
        })?;
        Ok(Self::from_lookup(|key| store.get(key)))
    }

    pub fn save<R: Runtime>(&self, app: &AppHandle<R>) -> Result<(), RelayError> {
        self.validate()?;
        let store = app.store(SETTINGS_STORE).map_err(|e| {
            warn!("Failed to open store: {}", e);
            RelayError::Store(e.to_string())
        })?;
        for (key, value) in self.to_entries() {
            store.set(key, value);
        }
        store.save().map_err(|e| {
            warn!("Failed to save store: {}", e);
            RelayError::Store(e.to_string())
        })?;
        info!(
            "Saved relay settings (configured: {}, interval: {}s, show icon: {})",
            self.is_configured(),
            self.send_interval,
            self.display_status_icon
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup_from(map: HashMap<&'static str, Value>) -> impl Fn(&str) -> Option<Value> {
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = RelaySettings::default();
        assert_eq!(settings.connection_string, "");
        assert_eq!(settings.send_interval, 10);
        assert!(settings.display_status_icon);
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_from_lookup_empty_store_uses_defaults() {
        let settings = RelaySettings::from_lookup(|_| None);
        assert_eq!(settings, RelaySettings::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let settings = RelaySettings::from_lookup(lookup_from(HashMap::from([
            (KEY_CONNECTION_STRING, json!("HostName=hub;DeviceId=printer;SharedAccessKey=abc")),
            (KEY_SEND_INTERVAL, json!(30)),
            (KEY_DISPLAY_STATUS_ICON, json!(false)),
        ])));
        assert!(settings.is_configured());
        assert_eq!(settings.send_interval, 30);
        assert!(!settings.display_status_icon);
    }

    #[test]
    fn test_from_lookup_accepts_string_interval() {
        let settings = RelaySettings::from_lookup(lookup_from(HashMap::from([(
            KEY_SEND_INTERVAL,
            json!(" 15 "),
        )])));
        assert_eq!(settings.send_interval, 15);
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let settings = RelaySettings::from_lookup(lookup_from(HashMap::from([
            (KEY_CONNECTION_STRING, json!(42)),
            (KEY_SEND_INTERVAL, json!(0)),
            (KEY_DISPLAY_STATUS_ICON, json!("yes")),
        ])));
        assert_eq!(settings, RelaySettings::default());
    }

    #[test]
    fn test_whitespace_connection_string_is_unconfigured() {
        let settings = RelaySettings {
            connection_string: "   ".to_string(),
            ..RelaySettings::default()
        };
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let settings = RelaySettings {
            send_interval: 0,
            ..RelaySettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Send interval"));
        assert!(RelaySettings::default().validate().is_ok());
    }

    #[test]
    fn test_entries_round_trip_through_lookup() {
        let original = RelaySettings {
            connection_string: "HostName=hub".to_string(),
            send_interval: 45,
            display_status_icon: false,
        };
        let map: HashMap<&'static str, Value> = original.to_entries().into_iter().collect();
        assert_eq!(RelaySettings::from_lookup(lookup_from(map)), original);
    }
}
