use tauri::{AppHandle, Manager};
use tracing::info;

use crate::relay::RelayMonitor;
use crate::settings::RelaySettings;

#[tauri::command]
pub fn get_relay_settings(app: AppHandle) -> Result<RelaySettings, String> {
    info!("Getting relay settings");
    Ok(RelaySettings::load(&app)?)
}

/// Persist settings. A new connection string resets the hub connection.
#[tauri::command]
pub fn save_relay_settings(app: AppHandle, settings: RelaySettings) -> Result<(), String> {
    let previous = RelaySettings::load(&app)?;
    settings.save(&app)?;

    if previous.connection_string != settings.connection_string {
        info!("Connection string changed, resetting IoT Hub connection");
        app.state::<RelayMonitor>().reset_connection();
    }
    Ok(())
}
