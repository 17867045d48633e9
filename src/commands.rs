use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::status::PluginMessage;

/// Event name the backend emits status pushes under.
pub const PLUGIN_MESSAGE_EVENT: &str = "plugin-message";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SaveRelaySettingsArgs {
    settings: RelaySettings,
}

#[derive(Serialize)]
struct SetPrinterConnectionArgs {
    connected: bool,
}

// -- Settings matching backend struct --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RelaySettings {
    pub connection_string: String,
    pub send_interval: u64,
    pub display_status_icon: bool,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            connection_string: String::new(),
            send_interval: 10,
            display_status_icon: true,
        }
    }
}

/// Envelope Tauri wraps every emitted event in.
#[derive(Deserialize)]
struct TauriEvent<T> {
    payload: T,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Typed invoke helpers --

pub async fn get_relay_settings() -> Result<RelaySettings, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_relay_settings", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_relay_settings(settings: &RelaySettings) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SaveRelaySettingsArgs {
        settings: settings.clone(),
    })
    .map_err(|e| e.to_string())?;

    invoke("save_relay_settings", args)
        .await
        .map(|_| ())
        .map_err(js_error)
}

pub async fn get_relay_status() -> Result<PluginMessage, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_relay_status", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_printer_connection() -> Result<bool, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_printer_connection", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_printer_connection(connected: bool) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetPrinterConnectionArgs { connected })
        .map_err(|e| e.to_string())?;

    invoke("set_printer_connection", args)
        .await
        .map(|_| ())
        .map_err(js_error)
}

/// Subscribe to status pushes for the lifetime of the page.
/// Payloads that do not decode are dropped.
pub async fn listen_plugin_messages<F>(mut on_message: F) -> Result<(), String>
where
    F: FnMut(PluginMessage) + 'static,
{
    let handler = Closure::wrap(Box::new(move |event: JsValue| {
        match serde_wasm_bindgen::from_value::<TauriEvent<PluginMessage>>(event) {
            Ok(event) => on_message(event.payload),
            Err(e) => log::debug!("Dropping undecodable plugin message: {}", e),
        }
    }) as Box<dyn FnMut(JsValue)>);

    listen(PLUGIN_MESSAGE_EVENT, &handler)
        .await
        .map_err(js_error)?;
    handler.forget();
    Ok(())
}
