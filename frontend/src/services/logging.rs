use crate::config::AppConfig;

/// Route `log` records and panics to the browser console
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config.log_level) {
        gloo::console::warn!("Logger already initialised:", e.to_string());
        return;
    }

    log::info!(
        "🏥 Logging at {} level, backend {}",
        config.log_level,
        config.api_base_url
    );
}
