use leptos::prelude::*;

use crate::layout::navigation::NavItem;
use crate::routes::Navigator;
use crate::shared::icons::icon;

/// Anchor that navigates through the [`Navigator`] instead of reloading.
#[component]
pub fn NavLink(
    item: NavItem,
    #[prop(optional, into)] class: String,
    #[prop(optional)] show_icon: bool,
    #[prop(optional, into)] on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let navigator = expect_context::<Navigator>();
    let is_active = {
        let navigator = navigator.clone();
        move || navigator.is_active(item.path)
    };

    view! {
        <a
            href=item.path
            class=move || {
                if is_active() {
                    format!("{} nav-link nav-link--active", class)
                } else {
                    format!("{} nav-link", class)
                }
            }
            on:click=move |ev| {
                ev.prevent_default();
                navigator.navigate(item.path);
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
            }
        >
            {item.icon.filter(|_| show_icon).map(icon)}
            <span class="nav-link__label">{item.label}</span>
        </a>
    }
}
