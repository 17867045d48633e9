pub mod error;
pub mod relay;
pub mod settings;

mod commands;

use tracing::{info, warn};

use relay::RelayMonitor;
use settings::RelaySettings;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(RelayMonitor::new())
        .invoke_handler(tauri::generate_handler![
            commands::settings::get_relay_settings,
            commands::settings::save_relay_settings,
            commands::relay::get_relay_status,
            commands::relay::get_printer_connection,
            commands::relay::set_printer_connection,
            commands::relay::report_relay_event,
        ])
        .setup(|app| {
            match RelaySettings::load(app.handle()) {
                Ok(settings) if settings.is_configured() => {
                    info!("IoT Hub connection string configured");
                }
                Ok(_) => info!("IoT Hub connection string not set"),
                Err(e) => warn!("Failed to read relay settings: {}", e),
            }
            relay::spawn_status_broadcaster(app.handle().clone());
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
