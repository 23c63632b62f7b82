pub mod footer;
pub mod global_context;
pub mod header;
pub mod nav_link;
pub mod navigation;

use leptos::prelude::*;

use crate::system::native_bridge::is_native_app;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (desktop nav, city, account)      |
/// +------------------------------------------+
/// |               Content                     |
/// +------------------------------------------+
/// |  Footer (mobile bottom nav, More)         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let class = if is_native_app() {
        "app-layout app-layout--native"
    } else {
        "app-layout"
    };

    view! {
        <div class=class>
            <header::Header />
            <main class="app-main">
                {center()}
            </main>
            <footer::Footer />
        </div>
    }
}
