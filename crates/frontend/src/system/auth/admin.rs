//! Admin console session (username/password, cookie issued by the backend).

use std::sync::Arc;

use contracts::system::auth::ADMIN_AUTH_COOKIE;
use leptos::prelude::*;

use super::{api, AuthStatus};
use crate::shared::http::ApiClient;
use crate::shared::storage::CookieJar;

/// Token recorded when login succeeded but the session cookie is HttpOnly.
pub const OPAQUE_SESSION_TOKEN: &str = "logged-in";

const LOGIN_FALLBACK_ERROR: &str = "Network error. Please try again.";

#[derive(Clone)]
pub struct AdminAuth {
    status: RwSignal<AuthStatus>,
    token: RwSignal<Option<String>>,
    initialized: RwSignal<bool>,
    checking_session: RwSignal<bool>,
    api: ApiClient,
    cookies: Arc<dyn CookieJar>,
}

impl AdminAuth {
    pub fn new(api: ApiClient, cookies: Arc<dyn CookieJar>) -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Uninitialized),
            token: RwSignal::new(None),
            initialized: RwSignal::new(false),
            checking_session: RwSignal::new(false),
            api,
            cookies,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_admin_logged_in(&self) -> bool {
        self.status.get().is_logged_in()
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Establish the session state once. Callers arriving while the first
    /// check is in flight return immediately.
    pub async fn init(&self) {
        if self.initialized.get_untracked() || self.checking_session.get_untracked() {
            return;
        }
        self.checking_session.set(true);
        self.derive_session().await;
        self.initialized.set(true);
        self.checking_session.set(false);
    }

    /// Same derivation as [`AdminAuth::init`]: a readable cookie wins,
    /// otherwise check-session decides.
    pub async fn refresh_auth_state(&self) {
        self.derive_session().await;
    }

    /// Returns a human readable message on failure and leaves state untouched.
    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        log::debug!("[admin-auth] login attempt for '{}'", username);
        match api::admin_login(&self.api, username, password).await {
            Ok(()) => {
                // The cookie may be HttpOnly, in which case it cannot be read back
                let token = self
                    .cookies
                    .get(ADMIN_AUTH_COOKIE)
                    .unwrap_or_else(|| OPAQUE_SESSION_TOKEN.to_string());
                self.set_logged_in(token);
                Ok(())
            }
            Err(err) => {
                log::error!("[admin-auth] login failed: {}", err);
                let message = err.to_string();
                if message.trim().is_empty() {
                    Err(LOGIN_FALLBACK_ERROR.to_string())
                } else {
                    Err(message)
                }
            }
        }
    }

    /// Local state is cleared even when the server call fails.
    pub async fn logout(&self) {
        if let Err(err) = api::admin_logout(&self.api).await {
            log::error!("[admin-auth] logout error: {}", err);
        }
        self.set_logged_out();
    }

    async fn derive_session(&self) {
        if let Some(token) = self.cookies.get(ADMIN_AUTH_COOKIE) {
            self.set_logged_in(token);
            return;
        }
        match api::admin_check_session(&self.api).await {
            Ok(()) => self.set_logged_in(OPAQUE_SESSION_TOKEN.to_string()),
            Err(err) => {
                log::debug!("[admin-auth] no active session: {}", err);
                self.set_logged_out();
            }
        }
    }

    fn set_logged_in(&self, token: String) {
        self.token.set(Some(token));
        self.status.set(AuthStatus::LoggedIn);
    }

    fn set_logged_out(&self) {
        self.token.set(None);
        self.status.set(AuthStatus::LoggedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{MemoryCookies, ScriptedTransport};
    use futures::executor::block_on;

    fn admin(transport: &Arc<ScriptedTransport>, cookies: MemoryCookies) -> AdminAuth {
        let api = ApiClient::new("https://nearhear.app", transport.clone());
        AdminAuth::new(api, Arc::new(cookies))
    }

    #[test]
    fn test_init_uses_readable_cookie_without_network() {
        let transport = Arc::new(ScriptedTransport::new());
        let auth = admin(&transport, MemoryCookies::with_cookie(ADMIN_AUTH_COOKIE, "tok"));

        block_on(auth.init());
        assert!(auth.is_admin_logged_in());
        assert_eq!(auth.token().as_deref(), Some("tok"));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn test_init_falls_back_to_check_session_once() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, ""));
        let auth = admin(&transport, MemoryCookies::default());

        block_on(auth.init());
        block_on(auth.init());
        assert!(auth.is_admin_logged_in());
        assert!(auth.is_initialized());
        assert_eq!(transport.call_count(), 1);
        assert!(transport.requests()[0].url.ends_with("/admin/checkSession"));
    }

    #[test]
    fn test_init_marks_initialized_even_when_check_fails() {
        let transport = Arc::new(ScriptedTransport::new().respond(401, "unauthorized"));
        let auth = admin(&transport, MemoryCookies::default());

        assert_eq!(auth.status(), AuthStatus::Uninitialized);
        block_on(auth.init());
        assert_eq!(auth.status(), AuthStatus::LoggedOut);
        assert!(auth.is_initialized());
    }

    #[test]
    fn test_login_with_invalid_credentials_reports_error() {
        let transport = Arc::new(ScriptedTransport::new().respond(401, "invalid credentials"));
        let auth = admin(&transport, MemoryCookies::default());

        let result = block_on(auth.login("admin".to_string(), "wrong".to_string()));
        let message = result.unwrap_err();
        assert!(!message.is_empty());
        assert!(message.contains("401"));
        assert!(!auth.is_admin_logged_in());
    }

    #[test]
    fn test_login_success_sends_credentials_and_marks_logged_in() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, ""));
        let auth = admin(&transport, MemoryCookies::default());

        block_on(auth.login("admin".to_string(), "secret".to_string())).unwrap();
        assert!(auth.is_admin_logged_in());
        assert_eq!(auth.token().as_deref(), Some(OPAQUE_SESSION_TOKEN));

        let request = &transport.requests()[0];
        assert!(request.url.ends_with("/admin/login"));
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "admin", "password": "secret"}));
    }

    #[test]
    fn test_logout_clears_state_when_network_fails() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "").fail("network down"));
        let auth = admin(&transport, MemoryCookies::default());

        block_on(auth.login("admin".to_string(), "secret".to_string())).unwrap();
        assert!(auth.is_admin_logged_in());

        block_on(auth.logout());
        assert!(!auth.is_admin_logged_in());
        assert_eq!(auth.status(), AuthStatus::LoggedOut);
        assert_eq!(auth.token(), None);
    }

    #[test]
    fn test_refresh_reads_cookie_again() {
        let transport = Arc::new(ScriptedTransport::new().respond(401, ""));
        let cookies = Arc::new(MemoryCookies::default());
        let api = ApiClient::new("https://nearhear.app", transport.clone());
        let auth = AdminAuth::new(api, cookies.clone());

        block_on(auth.init());
        assert!(!auth.is_admin_logged_in());

        cookies.insert(ADMIN_AUTH_COOKIE, "fresh");
        block_on(auth.refresh_auth_state());
        assert_eq!(auth.token().as_deref(), Some("fresh"));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_refresh_without_cookie_asks_check_session() {
        let transport = Arc::new(ScriptedTransport::new().respond(401, "").respond(200, "").respond(401, ""));
        let auth = admin(&transport, MemoryCookies::default());

        block_on(auth.init());
        assert_eq!(auth.status(), AuthStatus::LoggedOut);

        block_on(auth.refresh_auth_state());
        assert!(auth.is_admin_logged_in());
        assert_eq!(auth.token().as_deref(), Some(OPAQUE_SESSION_TOKEN));

        block_on(auth.refresh_auth_state());
        assert_eq!(auth.status(), AuthStatus::LoggedOut);
        assert_eq!(transport.call_count(), 3);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.url.ends_with("/admin/checkSession")));
    }
}
