use leptos::prelude::*;

use crate::status::StatusProjector;

/// IoT Hub connectivity indicator bound to the shared [`StatusProjector`].
#[component]
pub fn NavbarStatus() -> impl IntoView {
    let projector = expect_context::<StatusProjector>();
    let label = projector.label();
    let style_category = projector.style_category();
    let visible = projector.visible();

    view! {
        <Show when=move || visible.get()>
            <div id="navbar_plugin_azureiothub" class="navbar-status">
                <span class=move || format!("status-dot {}", style_category.get().css_class())></span>
                <span class=move || format!("status-label {}", style_category.get().css_class())>
                    {move || label.get()}
                </span>
            </div>
        </Show>
    }
}
