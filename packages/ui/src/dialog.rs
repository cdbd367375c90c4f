//! Blocking browser dialogs.
//!
//! Off the web renderer (native test builds) `confirm` answers yes and
//! `alert` logs, so callers never need their own cfg split.

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("confirm outside browser: {message}");
        true
    }
}

/// Blocking notice, used where validation must interrupt the user.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("alert outside browser: {message}");
}
