use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::{AppRoutes, Navigator, RouteTable};
use crate::shared::config::load_config;
use crate::shared::theme::ThemeProvider;
use crate::system::native_bridge;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("[app] {}", err);
            return view! { <FatalConfigPage message=err.to_string() /> }.into_any();
        }
    };
    // Every navigation entry must have a view before anything is mounted
    let routes = match RouteTable::app() {
        Ok(routes) => routes,
        Err(err) => {
            log::error!("[app] route configuration error: {}", err);
            return view! { <FatalConfigPage message=err.to_string() /> }.into_any();
        }
    };

    let ctx = AppGlobalContext::new(config);
    let navigator = Navigator::new(routes);
    navigator.init_history();
    navigator.track_page_views(ctx.analytics.clone());

    native_bridge::register(ctx.user_auth.clone());
    ctx.user_auth.init();
    if !ctx.user_auth.has_no_auth() {
        // Back from the OAuth round trip
        if let Some(path) = ctx.user_auth.handle_oauth_redirect() {
            navigator.navigate(&path);
        }
    }

    {
        let admin_auth = ctx.admin_auth.clone();
        spawn_local(async move { admin_auth.init().await });
    }
    {
        let city = ctx.city.clone();
        spawn_local(async move { city.fetch_supported_cities().await });
    }

    let store = ctx.store.clone();
    provide_context(ctx);
    provide_context(navigator);

    view! {
        <ThemeProvider store=store>
            <Shell center=|| view! { <AppRoutes /> }.into_any() />
        </ThemeProvider>
    }
    .into_any()
}

/// Rendered instead of the application when startup validation fails.
#[component]
fn FatalConfigPage(message: String) -> impl IntoView {
    view! {
        <div class="fatal-error">
            <h1>"NearHear could not start"</h1>
            <p>"The application is misconfigured."</p>
            <pre class="fatal-error__detail">{message}</pre>
        </div>
    }
}
