use contracts::domain::city::make_city_key;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;

/// City dropdown bound to [`crate::system::city::CityState`].
#[component]
pub fn CityPicker() -> impl IntoView {
    let city = use_app_context().city;
    let select_value = RwSignal::new(city.selected_city_key().unwrap_or_default());

    // Follow selections made elsewhere (first load default, other pickers)
    Effect::new({
        let city = city.clone();
        move |_| {
            let key = city.selected_city_key().unwrap_or_default();
            if select_value.get_untracked() != key {
                select_value.set(key);
            }
        }
    });

    Effect::new({
        let city = city.clone();
        move |_| {
            let value = select_value.get();
            if value.is_empty() || city.selected_city_key_untracked().as_deref() == Some(value.as_str()) {
                return;
            }
            log::debug!("[city] user selected {}", value);
            city.select_city_key(&value);
        }
    });

    let cities = {
        let city = city.clone();
        move || city.supported_cities()
    };
    let is_loading = Signal::derive({
        let city = city.clone();
        move || city.is_loading()
    });
    let error = move || city.error();

    view! {
        <div class="city-picker">
            {crate::shared::icons::icon("location")}
            <Select value=select_value size=SelectSize::Small>
                <Show when=move || select_value.get().is_empty()>
                    <option value="">{move || if is_loading.get() { "Loading..." } else { "Pick a city" }}</option>
                </Show>
                <For
                    each=cities
                    key=|c| make_city_key(c)
                    children=move |c| {
                        view! { <option value=make_city_key(&c)>{c.display_name()}</option> }
                    }
                />
            </Select>
            {move || error().map(|message| view! { <span class="city-picker__error" title=message>"!"</span> })}
        </div>
    }
}
