use leptos::prelude::*;

use crate::layout::nav_link::NavLink;
use crate::layout::navigation::{MOBILE_BOTTOM_NAV_ITEMS, MORE_MENU_ITEMS};
use crate::shared::icons::icon;

/// Mobile bottom bar with the "More" drawer.
#[component]
pub fn Footer() -> impl IntoView {
    let more_open = RwSignal::new(false);
    let close = Callback::new(move |_| more_open.set(false));

    view! {
        <footer data-zone="footer" class="bottom-nav">
            {MOBILE_BOTTOM_NAV_ITEMS
                .iter()
                .map(|item| {
                    view! { <NavLink item=*item class="bottom-nav__item" show_icon=true on_navigate=close /> }
                })
                .collect_view()}
            <button
                class=move || {
                    if more_open.get() { "bottom-nav__item bottom-nav__item--active" } else { "bottom-nav__item" }
                }
                on:click=move |_| more_open.update(|open| *open = !*open)
            >
                {icon("menu")}
                <span class="nav-link__label">"More"</span>
            </button>

            <Show when=move || more_open.get()>
                <div class="more-drawer">
                    {MORE_MENU_ITEMS
                        .iter()
                        .map(|item| {
                            view! { <NavLink item=*item class="more-drawer__item" on_navigate=close /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </footer>
    }
}
