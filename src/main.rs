//! Browser entry point. Built for `wasm32-unknown-unknown` and loaded by
//! Trunk via `index.html`; a no-op on other targets so host-side `cargo
//! test` still links.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("remity web client starting");

        leptos::mount::mount_to_body(remity_web::app::App);
    }
}
