//! Boundary with the authentication backend: the profile probe that
//! decides what the header shows, the login redirect taken after a
//! 401, and the share-link builder.

use gloo_net::http::Request;
use vidqa_types::{api::UserProfile, ChatError, Result};

/// Ask the backend who is signed in. `None` means nobody — the header
/// shows nothing and the first 401 will route through the login path.
pub async fn fetch_profile(endpoint: &str) -> Result<Option<UserProfile>> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ChatError::Backend {
            status: response.status(),
            message: "profile unavailable".to_string(),
        });
    }

    // Some backends report "nobody" as a null body rather than a 401
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    if value.is_null() {
        return Ok(None);
    }

    let profile: UserProfile = serde_json::from_value(value)?;
    Ok(Some(profile))
}

/// Navigate to the authentication entry point. Called after the 401
/// notification has had its delay to be seen.
pub fn redirect_to_login(login_path: &str) -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| ChatError::JsInterop("No window object".to_string()))?;
    window
        .location()
        .set_href(login_path)
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))
}

/// Shareable reference to a session, rooted at the current origin.
pub fn share_url(session_id: &str) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| ChatError::JsInterop("No window object".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
    Ok(format!("{}/chat?id={}", origin, session_id))
}
