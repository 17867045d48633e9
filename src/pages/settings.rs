use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, RelaySettings};
use crate::status::StatusProjector;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let projector = expect_context::<StatusProjector>();

    let (connection_string, set_connection_string) = signal(String::new());
    let (send_interval, set_send_interval) = signal(String::from("10"));
    let (display_status_icon, set_display_status_icon) = signal(true);
    let (is_saving, set_is_saving) = signal(false);
    let (save_status, set_save_status) = signal::<Option<String>>(None);

    // Load existing settings on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_relay_settings().await {
                Ok(settings) => {
                    set_connection_string.set(settings.connection_string);
                    set_send_interval.set(settings.send_interval.to_string());
                    set_display_status_icon.set(settings.display_status_icon);
                }
                Err(e) => {
                    set_save_status.set(Some(format!("Failed to load settings: {}", e)));
                }
            }
        });
    });

    let save_settings = move |_| {
        let interval = match send_interval.get().trim().parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                set_save_status.set(Some(
                    "Send interval must be a whole number of seconds".to_string(),
                ));
                return;
            }
        };
        let settings = RelaySettings {
            connection_string: connection_string.get().trim().to_string(),
            send_interval: interval,
            display_status_icon: display_status_icon.get(),
        };
        set_is_saving.set(true);
        set_save_status.set(None);
        spawn_local(async move {
            match commands::save_relay_settings(&settings).await {
                Ok(()) => {
                    // Settings panel dismissed: re-read the display preference
                    projector.on_preference_changed(settings.display_status_icon);
                    set_save_status.set(Some("Settings saved".to_string()));
                }
                Err(e) => {
                    set_save_status.set(Some(format!("Failed to save: {}", e)));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"IoT Hub Connection"</h3>
                <p class="section-description">
                    "Device connection string from the Azure portal. Changing it restarts the hub connection."
                </p>

                <div class="form-group">
                    <label for="connection-string">"Connection String"</label>
                    <input
                        id="connection-string"
                        type="password"
                        placeholder="HostName=...;DeviceId=...;SharedAccessKey=..."
                        class="input input-password"
                        prop:value=move || connection_string.get()
                        on:input=move |ev| {
                            set_connection_string.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="send-interval">"Telemetry Interval (seconds)"</label>
                    <input
                        id="send-interval"
                        type="number"
                        min="1"
                        class="input"
                        prop:value=move || send_interval.get()
                        on:input=move |ev| {
                            set_send_interval.set(event_target_value(&ev));
                        }
                    />
                </div>
            </section>

            <section class="settings-section">
                <h3>"Display"</h3>
                <div class="form-group">
                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            prop:checked=move || display_status_icon.get()
                            on:change=move |ev| {
                                set_display_status_icon.set(event_target_checked(&ev));
                            }
                        />
                        "Show IoT Hub status in the navbar"
                    </label>
                </div>
            </section>

            <div class="input-row">
                <button
                    class="btn btn-save"
                    on:click=save_settings
                    disabled=move || is_saving.get()
                >
                    {move || if is_saving.get() { "Saving..." } else { "Save" }}
                </button>
                <Show when=move || save_status.get().is_some()>
                    <span class="status-text">{move || save_status.get().unwrap_or_default()}</span>
                </Show>
            </div>
        </div>
    }
}
