use contracts::system::auth::AdminLoginRequest;

use crate::shared::http::{ApiClient, ApiError, RequestOptions};

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_LOGOUT_PATH: &str = "/admin/logout";
pub const ADMIN_CHECK_SESSION_PATH: &str = "/admin/checkSession";
/// Browser redirect target, never fetched.
pub const SPOTIFY_AUTH_PATH: &str = "/spotify/auth";
pub const SPOTIFY_LOGOUT_PATH: &str = "/spotify/logout";

/// Login with username and password. The backend answers with a session cookie.
pub async fn admin_login(api: &ApiClient, username: String, password: String) -> Result<(), ApiError> {
    let request = AdminLoginRequest { username, password };
    let options = RequestOptions::post().with_json(&request)?;
    api.request(ADMIN_LOGIN_PATH, options).await.map(|_| ())
}

/// Clear the admin session cookie on the server.
pub async fn admin_logout(api: &ApiClient) -> Result<(), ApiError> {
    api.request(ADMIN_LOGOUT_PATH, RequestOptions::post())
        .await
        .map(|_| ())
}

/// Succeeds only while the admin session is valid. The body is ignored.
pub async fn admin_check_session(api: &ApiClient) -> Result<(), ApiError> {
    api.request(ADMIN_CHECK_SESSION_PATH, RequestOptions::get())
        .await
        .map(|_| ())
}

/// Clear the Spotify session cookies on the server.
pub async fn spotify_logout(api: &ApiClient) -> Result<(), ApiError> {
    api.request(SPOTIFY_LOGOUT_PATH, RequestOptions::get())
        .await
        .map(|_| ())
}
