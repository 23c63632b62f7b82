use serde::{Deserialize, Serialize};

/// Body of `POST /admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Cookie set by the backend for an admin session. May be HttpOnly.
pub const ADMIN_AUTH_COOKIE: &str = "nearhear_admin_token";

/// Cookie holding the Spotify user id after the OAuth callback.
pub const SPOTIFY_USER_ID_COOKIE: &str = "spotify_user_id";

/// Cookie holding the Spotify auth token.
pub const SPOTIFY_AUTH_TOKEN_COOKIE: &str = "spotify_auth_token";

/// Value the backend writes into [`SPOTIFY_USER_ID_COOKIE`] when the OAuth
/// exchange failed.
pub const SPOTIFY_ERROR_SENTINEL: &str = "error";
