use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::header::CityPicker;
use crate::shared::theme::ThemeSelect;

#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_app_context();
    let city = ctx.city;
    let environment = ctx.environment;

    view! {
        <section class="page settings-page">
            <h1>"Settings"</h1>
            <div class="form-group">
                <label>"City"</label>
                <CityPicker />
                <button class="button button--ghost" on:click=move |_| city.clear_city()>
                    "Forget city"
                </button>
            </div>
            <div class="form-group">
                <label>"Theme"</label>
                <ThemeSelect />
            </div>
            <p class="page__hint">{format!("API: {}", environment.as_str())}</p>
        </section>
    }
}
