use leptos::prelude::*;

use crate::layout::global_context::use_app_context;

#[component]
pub fn MapView() -> impl IntoView {
    let selected = use_app_context().city.selected_city_signal();

    view! {
        <section class="page map-page">
            <h1>"Map"</h1>
            {move || match selected.get() {
                Some(city) => view! {
                    <div class="map-page__canvas" data-tz=city.tz_name.clone()>
                        {format!("Venues around {}", city.display_name())}
                    </div>
                }
                .into_any(),
                None => view! { <p class="page__empty">"Pick a city to see venues."</p> }.into_any(),
            }}
        </section>
    }
}
