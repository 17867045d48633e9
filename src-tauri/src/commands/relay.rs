use tauri::{AppHandle, State};
use tracing::info;

use crate::relay::{self, PluginMessage, RelayEvent, RelayMonitor};

#[tauri::command]
pub fn get_relay_status(app: AppHandle) -> Result<PluginMessage, String> {
    Ok(relay::current_status(&app)?)
}

#[tauri::command]
pub fn get_printer_connection(monitor: State<'_, RelayMonitor>) -> bool {
    monitor.printer_connected()
}

#[tauri::command]
pub fn set_printer_connection(monitor: State<'_, RelayMonitor>, connected: bool) {
    monitor.set_printer_connected(connected);
}

/// Outcome reported by the component driving the hub connection.
#[tauri::command]
pub fn report_relay_event(monitor: State<'_, RelayMonitor>, event: RelayEvent) {
    info!("Relay event: {:?}", event);
    monitor.apply(event);
}
