use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::system::auth::guard::RequireUser;

#[component]
pub fn YourShowsView() -> impl IntoView {
    let user_auth = use_app_context().user_auth;

    view! {
        <section class="page your-shows-page">
            <h1>"Your Shows"</h1>
            <RequireUser>
                {
                    let user_auth = user_auth.clone();
                    move || {
                        user_auth
                            .user_id()
                            .map(|id| format!("Shows saved by {}", id))
                            .unwrap_or_default()
                    }
                }
            </RequireUser>
        </section>
    }
}
