use seguimiento_envios::components::App;
use seguimiento_envios::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Seguimiento de envíos iniciando (backend: {})",
        CONFIG.backend_url()
    );

    yew::Renderer::<App>::new().render();
}
