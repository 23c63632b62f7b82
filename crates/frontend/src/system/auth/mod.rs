pub mod admin;
pub mod api;
pub mod guard;
pub mod user;

pub use admin::AdminAuth;
pub use user::UserAuth;

/// Client-side view of one auth domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Initialization has not completed yet.
    #[default]
    Uninitialized,
    LoggedOut,
    LoggedIn,
    /// The backend reported a failed OAuth exchange.
    Error,
}

impl AuthStatus {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthStatus::LoggedIn)
    }
}
