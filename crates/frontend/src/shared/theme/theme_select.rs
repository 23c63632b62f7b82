use leptos::prelude::*;

use super::{use_theme, Theme};

/// Theme dropdown for the header and the settings page.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="theme-select-wrapper">
            <button
                class="button button--ghost button--small"
                title="Theme"
                on:click=toggle_dropdown
            >
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
                </svg>
                "Theme"
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    <For
                        each=move || Theme::all()
                        key=|theme| theme.as_str()
                        children={
                            let ctx = ctx.clone();
                            move |theme: Theme| {
                                let is_active = {
                                    let ctx = ctx.clone();
                                    move || ctx.theme.get() == theme
                                };
                                let ctx = ctx.clone();
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "theme-dropdown__item theme-dropdown__item--active"
                                            } else {
                                                "theme-dropdown__item"
                                            }
                                        }
                                        on:click=move |_| {
                                            ctx.set_theme(theme);
                                            is_open.set(false);
                                        }
                                    >
                                        {theme.display_name()}
                                    </button>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
