use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::sidebar::Sidebar;
use crate::pages::home::HomePage;
use crate::pages::settings::SettingsPage;
use crate::status::StatusProjector;

#[component]
pub fn App() -> impl IntoView {
    // Hidden until the display preference has been read
    let projector = StatusProjector::new(false);
    provide_context(projector);

    Effect::new(move |_| {
        spawn_local(async move {
            let display_status_icon = match commands::get_relay_settings().await {
                Ok(settings) => settings.display_status_icon,
                Err(e) => {
                    log::warn!("Failed to load relay settings: {}", e);
                    commands::RelaySettings::default().display_status_icon
                }
            };
            // Status pushes may already have arrived; only visibility changes
            projector.on_preference_changed(display_status_icon);

            if let Err(e) =
                commands::listen_plugin_messages(move |msg| projector.on_plugin_message(msg)).await
            {
                log::error!("Failed to subscribe to relay status: {}", e);
            }
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
