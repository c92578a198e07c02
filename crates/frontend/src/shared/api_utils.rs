//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// Used when the config does not pin `[api] base_url`: the API is expected
/// on the same origin that served the admin panel.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join the base URL and an API path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("https://example.com/", "/products/multiupdate");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("https://x.test/", "/tags"), "https://x.test/tags");
        assert_eq!(api_url("https://x.test", "/tags"), "https://x.test/tags");
    }
}
