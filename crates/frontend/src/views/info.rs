use leptos::prelude::*;

/// Static content page (FAQ, About, Mailing List).
pub fn info_page(title: &'static str) -> AnyView {
    view! {
        <section class="page info-page">
            <h1>{title}</h1>
            <p class="page__empty">"Content coming soon."</p>
        </section>
    }
    .into_any()
}
