use leptos::*;
use leptos_meta::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::admin::AdminPanel;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="HRMS Lite" />
        <AdminPanel />
    }
}

/// Installs logging and mounts the admin panel into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // window.__HRMS_ENV (env.js) wins over ./config.json.
    spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App /> });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    mount();
}
