//! API utilities for talking to the catalog server.

/// Get the base URL for API requests.
///
/// The catalog API is served from the same origin as the page, so this is
/// just the current protocol and host.
///
/// # Returns
/// - Base URL like "http://localhost:5000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path.
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
