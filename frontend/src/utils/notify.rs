/// Blocking notification for failed user actions.
pub fn alert(message: &str) {
    log::warn!("{}", message);
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
