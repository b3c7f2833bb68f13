mod components;
mod config;
mod domain;
mod hooks;
mod navigation;
mod services;
mod session;

use components::app::{App, AppProps};
use config::AppConfig;

fn main() {
    let config = AppConfig::from_build_env();
    services::logging::init(&config);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
