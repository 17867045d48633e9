use serde::{Deserialize, Serialize};

/// Plugin identifier the UI filters status messages on.
pub const PLUGIN_IDENTIFIER: &str = "azureiothub";

/// Event name status messages are emitted under.
pub const PLUGIN_MESSAGE_EVENT: &str = "plugin-message";

pub const PRINTER_DISCONNECTED_ERROR: &str = "No telemetry being sent";

/// Status tag pushed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayStatus {
    Connected,
    Disconnected,
    Unconfigured,
    #[serde(rename = "Printer Disconnected")]
    PrinterDisconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub iot_hub_status: RelayStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_hub_message_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iot_hub_error: Option<String>,
}

/// `{ plugin, data }` envelope the UI receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMessage {
    pub plugin: String,
    pub data: StatusPayload,
}

impl PluginMessage {
    fn new(data: StatusPayload) -> Self {
        Self {
            plugin: PLUGIN_IDENTIFIER.to_string(),
            data,
        }
    }

    pub fn unconfigured() -> Self {
        Self::new(StatusPayload {
            iot_hub_status: RelayStatus::Unconfigured,
            iot_hub_message_number: None,
            iot_hub_error: None,
        })
    }

    pub fn disconnected(error: &str) -> Self {
        Self::new(StatusPayload {
            iot_hub_status: RelayStatus::Disconnected,
            iot_hub_message_number: None,
            iot_hub_error: Some(error.to_string()),
        })
    }

    pub fn printer_disconnected() -> Self {
        Self::new(StatusPayload {
            iot_hub_status: RelayStatus::PrinterDisconnected,
            iot_hub_message_number: None,
            iot_hub_error: Some(PRINTER_DISCONNECTED_ERROR.to_string()),
        })
    }

    pub fn connected(message_number: u64) -> Self {
        Self::new(StatusPayload {
            iot_hub_status: RelayStatus::Connected,
            iot_hub_message_number: Some(message_number),
            iot_hub_error: None,
        })
    }

    pub fn status(&self) -> RelayStatus {
        self.data.iot_hub_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unconfigured_serialize_omits_optional_fields() {
        let value = serde_json::to_value(PluginMessage::unconfigured()).unwrap();
        assert_eq!(
            value,
            json!({ "plugin": "azureiothub", "data": { "iot_hub_status": "Unconfigured" } })
        );
    }

    #[test]
    fn test_printer_disconnected_serialize_uses_spaced_tag() {
        let value = serde_json::to_value(PluginMessage::printer_disconnected()).unwrap();
        assert_eq!(value["data"]["iot_hub_status"], "Printer Disconnected");
        assert_eq!(value["data"]["iot_hub_error"], "No telemetry being sent");
    }

    #[test]
    fn test_connected_serialize_includes_message_number() {
        let value = serde_json::to_value(PluginMessage::connected(12)).unwrap();
        assert_eq!(value["data"]["iot_hub_status"], "Connected");
        assert_eq!(value["data"]["iot_hub_message_number"], 12);
        assert!(value["data"].get("iot_hub_error").is_none());
    }

    #[test]
    fn test_disconnected_keeps_empty_error() {
        let msg = PluginMessage::disconnected("");
        assert_eq!(msg.status(), RelayStatus::Disconnected);
        assert_eq!(msg.data.iot_hub_error.as_deref(), Some(""));
    }

    #[test]
    fn test_relay_status_deserialize() {
        let status: RelayStatus = serde_json::from_str(r#""Printer Disconnected""#).unwrap();
        assert_eq!(status, RelayStatus::PrinterDisconnected);

        let status: RelayStatus = serde_json::from_str(r#""Disconnected""#).unwrap();
        assert_eq!(status, RelayStatus::Disconnected);
    }
}
