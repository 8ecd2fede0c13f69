//! System clipboard access via the async Clipboard API.

use vidqa_types::{ChatError, Result};
use wasm_bindgen_futures::JsFuture;

/// Place text on the system clipboard.
/// The caller reports success or failure through a toast.
pub async fn copy_text(text: &str) -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| ChatError::JsInterop("No window object".to_string()))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
    Ok(())
}
