//! Browser Dialogs
//!
//! Thin wrappers over the blocking window dialogs. All user-facing failures
//! in this app are communicated synchronously and modally (no toasts, no
//! logging pipeline), so these two calls are the whole error surface.

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Show a blocking confirm dialog. Returns false when the dialog is
/// unavailable (e.g. headless contexts).
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
