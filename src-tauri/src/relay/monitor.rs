use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::message::PluginMessage;

/// Last known state of the IoT Hub connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubState {
    Connected,
    Disconnected,
}

/// Outcome reported by whatever drives the hub connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelayEvent {
    Connected,
    MessageSent,
    Failed { error: String },
}

#[derive(Debug)]
struct MonitorState {
    hub_state: HubState,
    last_error: String,
    message_count: u64,
    printer_connected: bool,
}

/// Shared relay connectivity tracker, managed as Tauri state.
pub struct RelayMonitor {
    state: Mutex<MonitorState>,
}

impl RelayMonitor {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MonitorState {
                hub_state: HubState::Disconnected,
                last_error: String::new(),
                message_count: 0,
                printer_connected: false,
            }),
        }
    }

    // Recovers from poisoning
    fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record_connected(&self) {
        let mut state = self.lock();
        state.hub_state = HubState::Connected;
        info!("Connected to Azure IoT Hub");
    }

    /// Count a delivered message. Returns the new message number.
    pub fn record_message_sent(&self) -> u64 {
        let mut state = self.lock();
        state.message_count = state.message_count.saturating_add(1);
        state.hub_state = HubState::Connected;
        info!("IoT Hub Telemetry Message #{}", state.message_count);
        state.message_count
    }

    pub fn record_failure(&self, error: &str) {
        let mut state = self.lock();
        state.hub_state = HubState::Disconnected;
        state.last_error = error.to_string();
        error!("IoT Hub failure: {}", error);
    }

    /// The connection string changed; wait for the next connection attempt.
    pub fn reset_connection(&self) {
        let mut state = self.lock();
        state.hub_state = HubState::Disconnected;
        state.last_error.clear();
        info!("IoT Hub connection reset");
    }

    pub fn set_printer_connected(&self, connected: bool) {
        let mut state = self.lock();
        if state.printer_connected != connected {
            info!("Printer connection changed: {}", connected);
        }
        state.printer_connected = connected;
    }

    pub fn apply(&self, event: RelayEvent) {
        match event {
            RelayEvent::Connected => self.record_connected(),
            RelayEvent::MessageSent => {
                self.record_message_sent();
            }
            RelayEvent::Failed { error } => self.record_failure(&error),
        }
    }

    pub fn hub_state(&self) -> HubState {
        self.lock().hub_state
    }

    pub fn printer_connected(&self) -> bool {
        self.lock().printer_connected
    }

    pub fn message_count(&self) -> u64 {
        self.lock().message_count
    }

    /// Derive the status message to push.
    ///
    /// Checked in order: missing configuration, hub disconnected, printer
    /// disconnected, then connected with the running message count.
    pub fn status_message(&self, configured: bool) -> PluginMessage {
        if !configured {
            return PluginMessage::unconfigured();
        }
        let state = self.lock();
        match state.hub_state {
            HubState::Disconnected => PluginMessage::disconnected(&state.last_error),
            HubState::Connected if !state.printer_connected => {
                PluginMessage::printer_disconnected()
            }
            HubState::Connected => PluginMessage::connected(state.message_count),
        }
    }
}

impl Default for RelayMonitor {
    fn default() -> Self {
        Self::new()
    }
}
