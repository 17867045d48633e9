use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::status::StatusProjector;

#[component]
pub fn HomePage() -> impl IntoView {
    let projector = expect_context::<StatusProjector>();
    let label = projector.label();
    let style_category = projector.style_category();

    let (refreshing, set_refreshing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (printer_connected, set_printer_connected) = signal(false);

    let refresh_status = move || {
        set_refreshing.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::get_relay_status().await {
                Ok(msg) => projector.on_plugin_message(msg),
                Err(e) => set_error.set(Some(format!("Failed to fetch status: {}", e))),
            }
            set_refreshing.set(false);
        });
    };

    // Fetch once on mount instead of waiting for the next push
    let initial_refresh = refresh_status.clone();
    Effect::new(move |_| {
        initial_refresh();
        spawn_local(async move {
            match commands::get_printer_connection().await {
                Ok(connected) => set_printer_connected.set(connected),
                Err(e) => set_error.set(Some(format!("Failed to read printer state: {}", e))),
            }
        });
    });

    let toggle_printer = move |ev| {
        let connected = event_target_checked(&ev);
        set_printer_connected.set(connected);
        spawn_local(async move {
            if let Err(e) = commands::set_printer_connection(connected).await {
                set_error.set(Some(format!("Failed to update printer state: {}", e)));
                return;
            }
            if let Ok(msg) = commands::get_relay_status().await {
                projector.on_plugin_message(msg);
            }
        });
    };

    view! {
        <div class="page home-page">
            <h2>"IoT Hub Relay"</h2>
            <p class="page-description">
                "Printer telemetry is forwarded to Azure IoT Hub. The relay reports its connection every 10 seconds."
            </p>

            <div class="card status-card">
                <h3>"Current Status"</h3>
                <p class=move || format!("status-text {}", style_category.get().css_class())>
                    {move || label.get()}
                </p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| refresh_status()
                    disabled=move || refreshing.get()
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh Status" }}
                </button>
            </div>

            <div class="form-group">
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || printer_connected.get()
                        on:change=toggle_printer
                    />
                    "Printer connected"
                </label>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="status-error-row">
                            <span class="status-text status-error">{e}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
