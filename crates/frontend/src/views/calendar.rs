use chrono::NaiveDate;
use contracts::domain::city::SupportedCity;
use contracts::domain::event::{EventsFilter, GetEventsRequest};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::header::CityPicker;

/// Days covered by the calendar's first request.
pub const CALENDAR_WINDOW_DAYS: u32 = 30;
pub const EVENTS_PAGE_SIZE: u32 = 50;

/// First events request for a city, starting today.
pub fn initial_request(city: SupportedCity, today: NaiveDate) -> GetEventsRequest {
    GetEventsRequest::first_page(
        EventsFilter::for_city(city, today, CALENDAR_WINDOW_DAYS),
        EVENTS_PAGE_SIZE,
    )
}

/// Local calendar date in the browser.
fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[component]
pub fn CalendarView() -> impl IntoView {
    let city = use_app_context().city;
    let selected = city.selected_city_signal();
    let request = Memo::new(move |_| {
        let city = selected.get()?;
        Some(initial_request(city, today()?))
    });

    view! {
        <section class="page calendar-page">
            <div class="page__header">
                <h1>"Calendar"</h1>
                <CityPicker />
            </div>
            {move || match request.get() {
                Some(request) => view! {
                    <p class="calendar-page__range">
                        {format!(
                            "Shows in {} from {} to {}",
                            request.filter.city.display_name(),
                            request.filter.start_date,
                            request.filter.end_date,
                        )}
                    </p>
                }
                .into_any(),
                None => view! {
                    <p class="page__empty">"Pick a city to see upcoming shows."</p>
                }
                .into_any(),
            }}
        </section>
    }
}
