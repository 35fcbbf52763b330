//! Browser entry point: installs logging and mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        use response_poetry::config::AppConfig;

        console_error_panic_hook::set_once();

        let level = AppConfig::from_build_env().map_or(log::Level::Info, |cfg| cfg.log_level);
        let _ = console_log::init_with_level(level);
        log::info!("response-poetry starting");

        leptos::mount::mount_to_body(response_poetry::app::App);
    }
}
