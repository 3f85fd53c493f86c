//! Homebase Console Entry Point
//!
//! This is the main entry point for the console's WASM application.
//! It initializes logging and mounts the Leptos app to the DOM.

use homebase_ui::App;
use leptos::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting Homebase console");

    // Mount the app
    mount_to_body(|| view! { <App /> });
}
