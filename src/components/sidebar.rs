use leptos::prelude::*;

use crate::components::navbar_status::NavbarStatus;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Azure IoT Hub"</h1>
                <p class="sidebar-subtitle">"Printer Telemetry Relay"</p>
                <NavbarStatus />
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Status"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </nav>
    }
}
