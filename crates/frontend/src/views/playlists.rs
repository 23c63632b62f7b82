use leptos::prelude::*;

use crate::layout::global_context::use_app_context;

#[component]
pub fn PlaylistsView() -> impl IntoView {
    let ctx = use_app_context();
    let selected = ctx.city.selected_city_signal();
    let user_auth = ctx.user_auth;

    view! {
        <section class="page playlists-page">
            <h1>"Playlists"</h1>
            <p>
                {move || {
                    selected
                        .get()
                        .map(|city| format!("Playlists for shows in {}", city.display_name()))
                        .unwrap_or_else(|| "Pick a city to browse playlists.".to_string())
                }}
            </p>
            <Show when=move || !user_auth.is_logged_in()>
                <p class="page__hint">"Log in with Spotify to save playlists to your account."</p>
            </Show>
        </section>
    }
}
