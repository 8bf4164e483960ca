//! Small platform shims: blocking alerts and timers.

/// Show a blocking alert. Browser builds use `window.alert`; elsewhere the
/// message is only logged.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    tracing::warn!("{message}");
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
