//! Bridge to the iOS app hosting the client in a WebView.
//!
//! The native side calls `window.handleAuthData({token, userID})` after its
//! own Spotify login and `window.clearAuthCookies()` on logout. Both write
//! the same cookies the backend would set and then refresh [`UserAuth`].

use std::cell::RefCell;

use contracts::system::auth::{SPOTIFY_AUTH_TOKEN_COOKIE, SPOTIFY_USER_ID_COOKIE};
use js_sys::Reflect;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::shared::storage::{BrowserCookies, CookieJar};
use crate::system::auth::UserAuth;

pub const COOKIE_SCOPE: &str = "path=/;domain=.nearhear.app";
pub const COOKIE_LIFETIME_DAYS: f64 = 365.0;
const EPOCH_EXPIRY: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

thread_local! {
    static USER_AUTH: RefCell<Option<UserAuth>> = const { RefCell::new(None) };
}

/// Payload passed by the native app.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NativeAuthData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "userID")]
    pub user_id: Option<String>,
}

/// True when running inside the iOS WebView.
pub fn is_native_app() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    ["webkit", "messageHandlers", "bridge"]
        .iter()
        .try_fold(JsValue::from(window), |target, key| {
            Reflect::get(&target, &JsValue::from_str(key))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null())
        })
        .is_some()
}

/// Make `user_auth` the session refreshed by bridge calls.
pub fn register(user_auth: UserAuth) {
    USER_AUTH.with(|slot| *slot.borrow_mut() = Some(user_auth));
}

pub fn auth_cookie(name: &str, value: &str, expires: &str) -> String {
    format!("{}={};expires={};{}", name, value, expires, COOKIE_SCOPE)
}

pub fn expired_cookie(name: &str) -> String {
    format!("{}=; expires={}; {}", name, EPOCH_EXPIRY, COOKIE_SCOPE)
}

/// Cookie strings for the non-empty values of `data`.
pub fn auth_cookies(data: &NativeAuthData, expires: &str) -> Vec<String> {
    let mut cookies = Vec::new();
    let fields = [
        (SPOTIFY_AUTH_TOKEN_COOKIE, &data.token),
        (SPOTIFY_USER_ID_COOKIE, &data.user_id),
    ];
    for (name, value) in fields {
        match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => cookies.push(auth_cookie(name, value, expires)),
            None => log::debug!("[native-bridge] {} was empty", name),
        }
    }
    cookies
}

pub fn apply_auth_data(jar: &dyn CookieJar, data: &NativeAuthData, expires: &str) {
    for cookie in auth_cookies(data, expires) {
        jar.set_raw(&cookie);
    }
}

pub fn clear_cookies(jar: &dyn CookieJar) {
    jar.set_raw(&expired_cookie(SPOTIFY_AUTH_TOKEN_COOKIE));
    jar.set_raw(&expired_cookie(SPOTIFY_USER_ID_COOKIE));
}

/// UTC expiry string one year from now.
fn one_year_from_now() -> String {
    let date = js_sys::Date::new_0();
    date.set_time(date.get_time() + COOKIE_LIFETIME_DAYS * 24.0 * 60.0 * 60.0 * 1000.0);
    String::from(date.to_utc_string())
}

fn refresh_user_auth() {
    USER_AUTH.with(|slot| {
        if let Some(auth) = slot.borrow().as_ref() {
            auth.refresh_auth_state();
        }
    });
}

#[wasm_bindgen(js_name = handleAuthData)]
pub fn handle_auth_data(data: JsValue) {
    log::debug!("[native-bridge] received auth data");
    let data: NativeAuthData = match serde_wasm_bindgen::from_value(data) {
        Ok(data) => data,
        Err(err) => {
            log::error!("[native-bridge] malformed auth data: {}", err);
            return;
        }
    };
    apply_auth_data(&BrowserCookies, &data, &one_year_from_now());
    refresh_user_auth();
}

#[wasm_bindgen(js_name = clearAuthCookies)]
pub fn clear_auth_cookies() {
    log::debug!("[native-bridge] clearing auth cookies");
    clear_cookies(&BrowserCookies);
    refresh_user_auth();
}
