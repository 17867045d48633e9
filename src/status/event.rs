//! Status events pushed by the relay backend.
//!
//! The backend sends a `{ plugin, data }` envelope whose `data` carries the
//! optional `iot_hub_status`, `iot_hub_message_number` and `iot_hub_error`
//! fields. Everything here is tolerant: unknown tags are kept rather than
//! rejected so newer backends never break an older UI.

use serde::Deserialize;

/// Plugin identifier the indicator listens for.
pub const PLUGIN_IDENTIFIER: &str = "azureiothub";

/// Connectivity state reported by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Unconfigured,
    PrinterDisconnected,
    /// A tag this UI does not know about.
    Unknown(String),
}

impl ConnectionStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Connected" => ConnectionStatus::Connected,
            "Disconnected" => ConnectionStatus::Disconnected,
            "Unconfigured" => ConnectionStatus::Unconfigured,
            // The backend spells this one with a space.
            "PrinterDisconnected" | "Printer Disconnected" => {
                ConnectionStatus::PrinterDisconnected
            }
            other => ConnectionStatus::Unknown(other.to_string()),
        }
    }
}

/// A single connectivity update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEvent {
    pub status: Option<ConnectionStatus>,
    pub message_number: Option<u64>,
    pub error_detail: Option<String>,
}

#[cfg(test)]
impl StatusEvent {
    pub fn connected(message_number: Option<u64>) -> Self {
        Self {
            status: Some(ConnectionStatus::Connected),
            message_number,
            error_detail: None,
        }
    }

    pub fn disconnected(error_detail: Option<&str>) -> Self {
        Self {
            status: Some(ConnectionStatus::Disconnected),
            message_number: None,
            error_detail: error_detail.map(|e| e.to_string()),
        }
    }

    pub fn with_status(status: ConnectionStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

// -- Wire format matching backend struct --

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    #[serde(default)]
    pub iot_hub_status: Option<String>,
    #[serde(default)]
    pub iot_hub_message_number: Option<u64>,
    #[serde(default)]
    pub iot_hub_error: Option<String>,
}

impl From<StatusPayload> for StatusEvent {
    fn from(payload: StatusPayload) -> Self {
        Self {
            status: payload
                .iot_hub_status
                .as_deref()
                .map(ConnectionStatus::from_tag),
            message_number: payload.iot_hub_message_number,
            error_detail: payload.iot_hub_error,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PluginMessage {
    pub plugin: String,
    #[serde(default)]
    pub data: StatusPayload,
}

impl PluginMessage {
    /// True if this message was sent by the IoT Hub relay.
    pub fn is_for_relay(&self) -> bool {
        self.plugin == PLUGIN_IDENTIFIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_statuses() {
        assert_eq!(ConnectionStatus::from_tag("Connected"), ConnectionStatus::Connected);
        assert_eq!(
            ConnectionStatus::from_tag("Disconnected"),
            ConnectionStatus::Disconnected
        );
        assert_eq!(
            ConnectionStatus::from_tag("Unconfigured"),
            ConnectionStatus::Unconfigured
        );
    }

    #[test]
    fn test_from_tag_printer_disconnected_spellings() {
        assert_eq!(
            ConnectionStatus::from_tag("PrinterDisconnected"),
            ConnectionStatus::PrinterDisconnected
        );
        assert_eq!(
            ConnectionStatus::from_tag("Printer Disconnected"),
            ConnectionStatus::PrinterDisconnected
        );
    }

    #[test]
    fn test_from_tag_unknown_is_kept() {
        assert_eq!(
            ConnectionStatus::from_tag("Throttled"),
            ConnectionStatus::Unknown("Throttled".to_string())
        );
        // Tags are case sensitive
        assert_eq!(
            ConnectionStatus::from_tag("connected"),
            ConnectionStatus::Unknown("connected".to_string())
        );
    }

    #[test]
    fn test_plugin_message_deserialize_connected() {
        let json = r#"{
            "plugin": "azureiothub",
            "data": { "iot_hub_status": "Connected", "iot_hub_message_number": 42 }
        }"#;
        let msg: PluginMessage = serde_json::from_str(json).unwrap();
        assert!(msg.is_for_relay());

        let event = StatusEvent::from(msg.data);
        assert_eq!(event, StatusEvent::connected(Some(42)));
    }

    #[test]
    fn test_plugin_message_deserialize_disconnected() {
        let json = r#"{
            "plugin": "azureiothub",
            "data": {
                "iot_hub_status": "Disconnected",
                "iot_hub_error": "Could not send IoT Telemetry Message"
            }
        }"#;
        let msg: PluginMessage = serde_json::from_str(json).unwrap();
        let event = StatusEvent::from(msg.data);
        assert_eq!(event.status, Some(ConnectionStatus::Disconnected));
        assert_eq!(
            event.error_detail.as_deref(),
            Some("Could not send IoT Telemetry Message")
        );
        assert!(event.message_number.is_none());
    }

    #[test]
    fn test_plugin_message_missing_data_has_no_status() {
        let msg: PluginMessage = serde_json::from_str(r#"{ "plugin": "azureiothub" }"#).unwrap();
        let event = StatusEvent::from(msg.data);
        assert!(event.status.is_none());
    }

    #[test]
    fn test_plugin_message_other_plugin() {
        let json = r#"{ "plugin": "navbartemp", "data": { "iot_hub_status": "Connected" } }"#;
        let msg: PluginMessage = serde_json::from_str(json).unwrap();
        assert!(!msg.is_for_relay());
    }

    #[test]
    fn test_negative_message_number_is_rejected() {
        let json = r#"{ "iot_hub_status": "Connected", "iot_hub_message_number": -1 }"#;
        let result: Result<StatusPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
