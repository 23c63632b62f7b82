//! History based navigation over the [`RouteTable`].

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::routes::{RouteDef, RouteMatch, RouteTable};
use crate::shared::analytics::Analytics;

/// Current location and the validated route table.
#[derive(Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    path: RwSignal<String>,
}

/// Extra page view properties for a route.
pub fn page_view_extra(route: &RouteDef) -> Value {
    json!({ "label": route.label })
}

/// Capture a page view for the route `path` lands on, under its canonical path.
pub fn record_page_view(analytics: &dyn Analytics, table: &RouteTable, path: &str) {
    let route = table.resolve(path).route();
    analytics.capture_page_view(route.path, Some(route.name), Some(page_view_extra(route)));
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        let path = table.fallback().path.to_string();
        Self {
            table: Arc::new(table),
            path: RwSignal::new(path),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current_path(&self) -> String {
        self.path.get()
    }

    pub fn current_route(&self) -> RouteDef {
        self.path.with(|path| self.table.resolve(path).route().clone())
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.path.with(|current| current == path)
    }

    /// Canonical path for a location. The flag is set when the location was
    /// redirected.
    pub fn canonical(&self, path: &str) -> (String, bool) {
        match self.table.resolve(path) {
            RouteMatch::Matched(route) => (route.path.to_string(), false),
            RouteMatch::Redirect(route) => (route.path.to_string(), true),
        }
    }

    /// Move to `path` without touching browser history. Returns `false` when
    /// the location did not change.
    pub fn set_location(&self, path: &str) -> bool {
        let (canonical, _) = self.canonical(path);
        if self.path.with_untracked(|current| *current == canonical) {
            return false;
        }
        self.path.set(canonical);
        true
    }

    /// Push a history entry for `path` and show it.
    pub fn navigate(&self, path: &str) {
        if !self.set_location(path) {
            return;
        }
        let path = self.path.get_untracked();
        log::debug!("[router] navigate {}", path);
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    log::error!("[router] pushState failed: {:?}", err);
                }
            }
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Sync with the browser location and follow back/forward navigation.
    /// Redirected locations are rewritten in place.
    pub fn init_history(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location().pathname().unwrap_or_default();
        let (canonical, redirected) = self.canonical(&location);
        if redirected {
            log::debug!("[router] redirect {} -> {}", location, canonical);
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&canonical));
            }
        }
        self.path.set(canonical);

        let this = self.clone();
        let on_pop_state = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location().pathname().unwrap_or_default();
            let (canonical, redirected) = this.canonical(&location);
            if redirected {
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&canonical));
                }
            }
            if this.set_location(&canonical) {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("popstate", on_pop_state.as_ref().unchecked_ref());
        // Lives for the whole session
        on_pop_state.forget();
    }

    /// Capture a page view after every completed navigation.
    pub fn track_page_views(&self, analytics: Arc<dyn Analytics>) {
        let this = self.clone();
        Effect::new(move |_| {
            let path = this.current_path();
            record_page_view(analytics.as_ref(), &this.table, &path);
        });
    }
}
