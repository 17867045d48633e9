mod app;
mod commands;
mod components;
mod pages;
mod status;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(App);
}
