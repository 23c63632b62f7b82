use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app_context;
use crate::system::auth::guard::RequireAdmin;

#[component]
pub fn AdminView() -> impl IntoView {
    let admin_auth = use_app_context().admin_auth;

    view! {
        <section class="page admin-page">
            <RequireAdmin>
                {
                    let admin_auth = admin_auth.clone();
                    move || {
                        let admin_auth = admin_auth.clone();
                        view! {
                            <div class="page__header">
                                <h1>"Admin"</h1>
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| {
                                        let admin_auth = admin_auth.clone();
                                        spawn_local(async move { admin_auth.logout().await });
                                    }
                                >
                                    "Log out"
                                </button>
                            </div>
                        }
                    }
                }
            </RequireAdmin>
        </section>
    }
}
