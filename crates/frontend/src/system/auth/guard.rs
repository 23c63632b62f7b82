use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::system::pages::admin_login::AdminLoginPage;

/// Shows children to a logged in admin and the login form otherwise.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let admin_auth = use_app_context().admin_auth;

    move || {
        if !admin_auth.is_initialized() {
            view! { <div class="page-loading">"Checking session..."</div> }.into_any()
        } else if admin_auth.is_admin_logged_in() {
            children().into_any()
        } else {
            view! { <AdminLoginPage /> }.into_any()
        }
    }
}

/// Shows children to a Spotify user. Otherwise offers the login button.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let user_auth = use_app_context().user_auth;
    let login = user_auth.clone();
    let is_error = user_auth.clone();

    view! {
        <Show
            when=move || user_auth.is_logged_in()
            fallback=move || {
                let login = login.clone();
                let is_error = is_error.clone();
                view! {
                    <div class="login-required">
                        <Show when=move || is_error.is_auth_error()>
                            <p class="error-message">"Spotify login failed. Please try again."</p>
                        </Show>
                        <p>"Log in with Spotify to see this page."</p>
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                let path = web_sys::window().and_then(|w| w.location().pathname().ok());
                                login.login_with_spotify(path.as_deref());
                            }
                        >
                            "Log in with Spotify"
                        </button>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
