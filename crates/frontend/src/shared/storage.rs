//! Browser storage primitives: `localStorage` and `document.cookie`.
//!
//! Both are treated as synchronous and always available. Failures to reach
//! them degrade to "nothing stored" rather than errors.

use wasm_bindgen::JsCast;
use web_sys::window;

/// Durable key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Cookie access for the current document.
pub trait CookieJar: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    /// Writes one raw `Set-Cookie` style string, e.g. `a=b; path=/`.
    fn set_raw(&self, cookie: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCookies;

fn get_html_document() -> Option<web_sys::HtmlDocument> {
    window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieJar for BrowserCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = get_html_document()?.cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn set_raw(&self, cookie: &str) {
        if let Some(document) = get_html_document() {
            let _ = document.set_cookie(cookie);
        }
    }
}

/// Find `name` in a `k=v; k2=v2` cookie header. Empty values count as absent.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let header = "spotify_user_id=abc123; nearhear_admin_token=tok; empty=";
        assert_eq!(parse_cookie(header, "spotify_user_id").as_deref(), Some("abc123"));
        assert_eq!(parse_cookie(header, "nearhear_admin_token").as_deref(), Some("tok"));
        assert_eq!(parse_cookie(header, "empty"), None);
        assert_eq!(parse_cookie(header, "missing"), None);
        assert_eq!(parse_cookie("", "spotify_user_id"), None);
    }

    #[test]
    fn test_parse_cookie_requires_exact_name() {
        let header = "xspotify_user_id=nope; spotify_user_id=yes";
        assert_eq!(parse_cookie(header, "spotify_user_id").as_deref(), Some("yes"));
    }
}
