use bas_analytics::config::CONFIG;
use bas_analytics::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 BAS Analytics starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
