//! API utilities for frontend-backend communication
//!
//! URL construction shared by the HTTP client and browser redirects.

/// Join an API path onto a base URL.
///
/// Trailing slashes are stripped from the base and leading slashes from the
/// path, and the two are joined with exactly one slash.
///
/// # Example
/// ```rust
/// use nearhear_frontend::shared::api_utils::resolve_api_path;
/// let url = resolve_api_path("https://nearhear.app/", "/media/getSupportedCities");
/// assert_eq!(url, "https://nearhear.app/media/getSupportedCities");
/// ```
pub fn resolve_api_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Append a single query parameter, percent-encoding the value.
pub fn with_query_param(url: &str, name: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, name, urlencoding::encode(value))
}
