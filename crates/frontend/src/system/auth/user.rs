//! End-user session via Spotify OAuth.
//!
//! The backend sets `spotify_user_id` after the OAuth callback, or the
//! sentinel `error` when the exchange failed. That cookie is parsed here into
//! an [`AuthStatus`]; nothing else looks at the raw value.

use std::sync::Arc;

use contracts::system::auth::{SPOTIFY_ERROR_SENTINEL, SPOTIFY_USER_ID_COOKIE};
use leptos::prelude::*;

use super::{api, AuthStatus};
use crate::shared::analytics::Analytics;
use crate::shared::api_utils::with_query_param;
use crate::shared::http::ApiClient;
use crate::shared::storage::{CookieJar, KeyValueStore};

/// Local storage key for the path to return to after the OAuth round trip.
pub const LAST_SECTION_KEY: &str = "nearhear-last-section-before-auth";

/// Map the user id cookie to a status and user id.
pub fn status_from_cookie(value: Option<&str>) -> (AuthStatus, Option<String>) {
    match value {
        Some(SPOTIFY_ERROR_SENTINEL) => (AuthStatus::Error, None),
        Some(user_id) if !user_id.is_empty() => (AuthStatus::LoggedIn, Some(user_id.to_string())),
        _ => (AuthStatus::LoggedOut, None),
    }
}

#[derive(Clone)]
pub struct UserAuth {
    status: RwSignal<AuthStatus>,
    user_id: RwSignal<Option<String>>,
    initialized: RwSignal<bool>,
    api: ApiClient,
    cookies: Arc<dyn CookieJar>,
    store: Arc<dyn KeyValueStore>,
    analytics: Arc<dyn Analytics>,
}

impl UserAuth {
    pub fn new(
        api: ApiClient,
        cookies: Arc<dyn CookieJar>,
        store: Arc<dyn KeyValueStore>,
        analytics: Arc<dyn Analytics>,
    ) -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Uninitialized),
            user_id: RwSignal::new(None),
            initialized: RwSignal::new(false),
            api,
            cookies,
            store,
            analytics,
        }
    }

    /// Read the session cookie on first use only.
    pub fn init(&self) {
        if self.initialized.get_untracked() {
            return;
        }
        self.refresh_auth_state();
        self.initialized.set(true);
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.status.get().is_logged_in()
    }

    pub fn is_auth_error(&self) -> bool {
        self.status.get() == AuthStatus::Error
    }

    pub fn has_no_auth(&self) -> bool {
        matches!(
            self.status.get(),
            AuthStatus::Uninitialized | AuthStatus::LoggedOut
        )
    }

    pub fn user_id(&self) -> Option<String> {
        self.user_id.get()
    }

    /// Re-read the cookie, e.g. after the OAuth callback redirect.
    pub fn refresh_auth_state(&self) {
        let cookie = self.cookies.get(SPOTIFY_USER_ID_COOKIE);
        let (status, user_id) = status_from_cookie(cookie.as_deref());
        log::debug!("[user-auth] session status {:?}", status);

        if let Some(user_id) = &user_id {
            self.analytics.identify(user_id, None);
        }
        self.user_id.set(user_id);
        self.status.set(status);
    }

    pub fn store_last_section(&self, path: &str) {
        self.store.set(LAST_SECTION_KEY, path);
    }

    pub fn last_section(&self) -> Option<String> {
        self.store.get(LAST_SECTION_KEY)
    }

    pub fn clear_last_section(&self) {
        self.store.remove(LAST_SECTION_KEY);
    }

    /// OAuth entry point, carrying the known user id if there is one.
    pub fn login_url(&self) -> String {
        let url = self.api.url_for(api::SPOTIFY_AUTH_PATH);
        match self.user_id.get_untracked() {
            Some(user_id) => with_query_param(&url, "userid", &user_id),
            None => url,
        }
    }

    /// Remember where the user was and hand the browser to the OAuth flow.
    pub fn login_with_spotify(&self, current_path: Option<&str>) {
        if let Some(path) = current_path {
            self.store_last_section(path);
        }
        let url = self.login_url();
        log::debug!("[user-auth] redirecting to {}", url);
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(&url) {
                log::error!("[user-auth] redirect failed: {:?}", err);
            }
        }
    }

    /// Local state and analytics identity are cleared even when the server
    /// call fails.
    pub async fn logout(&self) {
        if let Err(err) = api::spotify_logout(&self.api).await {
            log::error!("[user-auth] logout error: {}", err);
        }
        self.user_id.set(None);
        self.status.set(AuthStatus::LoggedOut);
        self.analytics.reset();
    }

    /// Pick up the cookies set by the OAuth callback and return (and forget)
    /// the path stored before the redirect.
    pub fn handle_oauth_redirect(&self) -> Option<String> {
        self.refresh_auth_state();
        let last_section = self.last_section();
        if last_section.is_some() {
            self.clear_last_section();
        }
        last_section
    }
}
