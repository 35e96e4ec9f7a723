mod api;
mod app;
mod charts;
mod components;
mod config;
mod controller;
mod error;
mod filters;
mod format;
mod http;
mod modals;
mod models;
mod pages;
mod report;
mod session;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<app::App>::new().render();
}
