use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app_context;
use crate::system::auth::guard::RequireUser;

#[component]
pub fn ProfileView() -> impl IntoView {
    let user_auth = use_app_context().user_auth;

    view! {
        <section class="page profile-page">
            <h1>"Profile / Account"</h1>
            <RequireUser>
                {
                    let user_auth = user_auth.clone();
                    move || {
                        let logout = user_auth.clone();
                        view! {
                            <p>{format!("Spotify account: {}", user_auth.user_id().unwrap_or_default())}</p>
                            <button
                                class="button button--secondary"
                                on:click=move |_| {
                                    let logout = logout.clone();
                                    spawn_local(async move { logout.logout().await });
                                }
                            >
                                "Log out"
                            </button>
                        }
                    }
                }
            </RequireUser>
        </section>
    }
}
