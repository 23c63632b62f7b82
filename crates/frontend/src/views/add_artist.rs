use leptos::prelude::*;

#[component]
pub fn AddArtistView() -> impl IntoView {
    view! {
        <section class="page add-artist-page">
            <h1>"Add Artist"</h1>
            <p>"Tell us about a local artist we are missing."</p>
        </section>
    }
}
