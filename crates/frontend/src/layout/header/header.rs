use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::city_picker::CityPicker;
use crate::layout::global_context::use_app_context;
use crate::layout::nav_link::NavLink;
use crate::layout::navigation::{ADD_MENU_ITEMS, DESKTOP_NAV_ITEMS};
use crate::routes::Navigator;
use crate::shared::theme::ThemeSelect;

#[component]
pub fn Header() -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let add_open = RwSignal::new(false);

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a
                    href="/calendar"
                    class="header__title"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigator.navigate("/calendar");
                    }
                >
                    "NearHear"
                </a>
                <nav class="header__nav">
                    {DESKTOP_NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=*item class="header__nav-item" /> })
                        .collect_view()}
                    <div class="header__add-menu">
                        <button
                            class="button button--ghost"
                            on:click=move |_| add_open.update(|open| *open = !*open)
                        >
                            "Add"
                        </button>
                        <Show when=move || add_open.get()>
                            <div class="header__dropdown">
                                {ADD_MENU_ITEMS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <NavLink
                                                item=*item
                                                class="header__dropdown-item"
                                                on_navigate=Callback::new(move |_| add_open.set(false))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                </nav>
            </div>
            <div class="header__actions">
                <CityPicker />
                <ThemeSelect />
                <AccountButton />
            </div>
        </header>
    }
}

/// Spotify login state: login button, error hint or logout.
#[component]
fn AccountButton() -> impl IntoView {
    let user_auth = use_app_context().user_auth;

    move || {
        let auth = user_auth.clone();
        if auth.is_logged_in() {
            view! {
                <button
                    class="button button--ghost"
                    on:click=move |_| {
                        let auth = auth.clone();
                        spawn_local(async move { auth.logout().await });
                    }
                >
                    "Log out"
                </button>
            }
            .into_any()
        } else {
            let failed = auth.is_auth_error();
            view! {
                <div class="header__login">
                    {failed.then(|| view! { <span class="header__login-error">"Login failed"</span> })}
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            let path = web_sys::window().and_then(|w| w.location().pathname().ok());
                            auth.login_with_spotify(path.as_deref());
                        }
                    >
                        {if failed { "Try again" } else { "Log in with Spotify" }}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
