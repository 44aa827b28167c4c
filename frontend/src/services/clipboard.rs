//! Clipboard access.

use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult};

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;

    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?;

    log::info!("📋 Copied {} characters to clipboard", text.len());
    Ok(())
}

/// Fire-and-forget copy; failures are only logged.
pub fn copy_text(text: String) {
    leptos::spawn_local(async move {
        if let Err(e) = copy_to_clipboard(&text).await {
            log::warn!("⚠️  {}", e);
        }
    });
}
