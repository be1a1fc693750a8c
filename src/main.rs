mod api;
mod catalog;
mod components;
mod config;
mod engine;
mod model;
mod state;
mod util;
mod vote;

use components::app::App;
use config::AppConfig;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    util::init_logging(AppConfig::from_build_env().log_level);
    yew::Renderer::<App>::new().render();
}
