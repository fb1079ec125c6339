//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing endpoint URLs.

/// Get the base URL for API requests
///
/// The client is served by the same origin that hosts the `/upload` and
/// `/ask` endpoints, so the base is just the current window origin.
///
/// # Returns
/// - Origin like "http://localhost:5000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full endpoint URL from a path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/upload");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
