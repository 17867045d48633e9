use super::event::{ConnectionStatus, StatusEvent};

pub const WAITING_LABEL: &str = "Waiting For Status";
pub const UNCONFIGURED_LABEL: &str = "Check Configuration Settings";
pub const PRINTER_DISCONNECTED_LABEL: &str = "Printer Not Connected - No Telemetry Being Sent";

/// Substituted when a Disconnected event carries no usable error text.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Visual category of the indicator, bound to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    Unconfigured,
    Online,
    Offline,
    Warning,
}

impl StyleCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            StyleCategory::Unconfigured => "iothub-unconfigured",
            StyleCategory::Online => "iothub-online",
            StyleCategory::Offline => "iothub-offline",
            StyleCategory::Warning => "iothub-warning",
        }
    }
}

/// What the navbar indicator currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub label: String,
    pub style_category: StyleCategory,
    pub visible: bool,
}

impl DisplayState {
    pub fn initial(preference_enabled: bool) -> Self {
        Self {
            label: WAITING_LABEL.to_string(),
            style_category: StyleCategory::Unconfigured,
            visible: preference_enabled,
        }
    }

    /// Apply a status event. Returns false if the event was ignored.
    pub fn apply(&mut self, event: &StatusEvent) -> bool {
        let Some(status) = event.status.as_ref() else {
            return false;
        };
        let Some((style_category, label)) = project(status, event) else {
            return false;
        };
        self.style_category = style_category;
        self.label = label;
        true
    }
}

/// Map a recognised status to its category and label.
/// Unknown tags yield `None` and leave the display untouched.
pub fn project(status: &ConnectionStatus, event: &StatusEvent) -> Option<(StyleCategory, String)> {
    match status {
        ConnectionStatus::Connected => {
            let label = match event.message_number {
                Some(n) => format!("IoT Hub Connected - Message #{}", n),
                None => "IoT Hub Connected".to_string(),
            };
            Some((StyleCategory::Online, label))
        }
        ConnectionStatus::Disconnected => {
            let detail = event
                .error_detail
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .unwrap_or(UNKNOWN_ERROR);
            Some((
                StyleCategory::Offline,
                format!("IoT Hub Disconnected - Error: {}", detail),
            ))
        }
        ConnectionStatus::Unconfigured => {
            Some((StyleCategory::Unconfigured, UNCONFIGURED_LABEL.to_string()))
        }
        ConnectionStatus::PrinterDisconnected => {
            Some((StyleCategory::Warning, PRINTER_DISCONNECTED_LABEL.to_string()))
        }
        ConnectionStatus::Unknown(_) => None,
    }
}
