use std::time::Duration;

use tauri::{AppHandle, Emitter, Manager, Runtime};
use tracing::{debug, info, warn};

use super::message::{PluginMessage, PLUGIN_MESSAGE_EVENT};
use super::monitor::RelayMonitor;
use crate::error::RelayError;
use crate::settings::RelaySettings;

/// How often the relay status is pushed to the UI.
pub const STATUS_PUSH_INTERVAL: Duration = Duration::from_secs(10);

/// The status message the UI should be showing right now.
pub fn current_status<R: Runtime>(app: &AppHandle<R>) -> Result<PluginMessage, RelayError> {
    let settings = RelaySettings::load(app)?;
    let monitor = app.state::<RelayMonitor>();
    Ok(monitor.status_message(settings.is_configured()))
}

fn push_status<R: Runtime>(app: &AppHandle<R>) -> Result<(), RelayError> {
    let message = current_status(app)?;
    debug!("Pushing relay status: {:?}", message.status());
    app.emit(PLUGIN_MESSAGE_EVENT, &message)
        .map_err(|e| RelayError::Emit(e.to_string()))
}

/// Start the repeating status push. Runs for the lifetime of the app.
pub fn spawn_status_broadcaster<R: Runtime>(app: AppHandle<R>) {
    info!(
        "Starting relay status broadcaster (every {}s)",
        STATUS_PUSH_INTERVAL.as_secs()
    );
    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(STATUS_PUSH_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = push_status(&app) {
                warn!("Failed to push relay status: {}", e);
            }
        }
    });
}
