//! Session Notes - Main Entry Point
//!
//! Serves the Dioxus application in fullstack mode, or launches it directly
//! in the browser / as a native window. The summary service itself is a
//! separate process; this binary only hosts the client.

use session_notes::app::App;

// Fullstack server - dioxus::serve() owns the runtime, so no #[tokio::main]
#[cfg(feature = "server")]
fn main() {
    // Subscriber must be installed before serve() starts logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Session Notes...");

    dioxus::serve(|| async move {
        // No extra routes: every call goes straight to the summary service
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

// Browser build
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Session Notes loaded".into());
    dioxus::launch(App);
}

// Desktop build
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
