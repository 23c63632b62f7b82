use leptos::prelude::*;

use crate::layout::global_context::use_app_context;

#[component]
pub fn AddEventsView() -> impl IntoView {
    let selected = use_app_context().city.selected_city_signal();

    view! {
        <section class="page add-events-page">
            <h1>"Add Event"</h1>
            <p>
                {move || match selected.get() {
                    Some(city) => format!("Submit a show happening in {}.", city.display_name()),
                    None => "Pick a city before submitting a show.".to_string(),
                }}
            </p>
        </section>
    }
}
