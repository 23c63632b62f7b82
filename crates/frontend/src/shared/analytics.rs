//! Product analytics.
//!
//! The implementation is chosen once at startup: [`NoopAnalytics`] when no
//! PostHog key is configured, [`PostHogAnalytics`] otherwise. Callers never
//! check whether analytics are enabled.

use std::sync::Arc;

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

use crate::shared::config::AnalyticsConfig;

pub const PAGE_VIEW_EVENT: &str = "$pageview";

pub trait Analytics: Send + Sync {
    fn is_enabled(&self) -> bool;
    /// Associate subsequent events with a user (after authentication).
    fn identify(&self, user_id: &str, properties: Option<Value>);
    /// Forget the identified user (on logout).
    fn reset(&self);
    fn capture(&self, event: &str, properties: Option<Value>);
    fn capture_page_view(&self, path: &str, route_name: Option<&str>, properties: Option<Value>);
}

/// Used when analytics are not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn is_enabled(&self) -> bool {
        false
    }

    fn identify(&self, _user_id: &str, _properties: Option<Value>) {}

    fn reset(&self) {}

    fn capture(&self, _event: &str, _properties: Option<Value>) {}

    fn capture_page_view(&self, _path: &str, _route_name: Option<&str>, _properties: Option<Value>) {}
}

/// Select the analytics implementation for this session.
pub fn from_config(config: &AnalyticsConfig) -> Arc<dyn Analytics> {
    match config.key() {
        Some(key) => match PostHogAnalytics::init(key, &config.posthog_host) {
            Some(posthog) => {
                log::info!("[analytics] PostHog initialized");
                Arc::new(posthog)
            }
            None => {
                log::warn!("[analytics] PostHog script not loaded - analytics disabled");
                Arc::new(NoopAnalytics)
            }
        },
        None => {
            log::warn!("[analytics] NEARHEAR_POSTHOG_KEY not set - analytics disabled");
            Arc::new(NoopAnalytics)
        }
    }
}

/// Properties sent with a `$pageview` event. Extra properties are merged
/// last and may override the defaults.
pub fn page_view_properties(
    current_url: &str,
    path: &str,
    route_name: Option<&str>,
    extra: Option<Value>,
) -> Value {
    let mut properties = Map::new();
    properties.insert("$current_url".to_string(), Value::from(current_url));
    properties.insert("path".to_string(), Value::from(path));
    properties.insert(
        "route_name".to_string(),
        route_name.map(Value::from).unwrap_or(Value::Null),
    );
    if let Some(Value::Object(extra)) = extra {
        properties.extend(extra);
    }
    Value::Object(properties)
}

/// Client for the PostHog JS snippet loaded by the host page (`window.posthog`).
#[derive(Debug, Clone, Copy)]
pub struct PostHogAnalytics;

impl PostHogAnalytics {
    /// Calls `posthog.init`. Returns `None` when the snippet is not present.
    pub fn init(api_key: &str, api_host: &str) -> Option<Self> {
        posthog_handle()?;

        let options = serde_json::json!({
            "api_host": api_host,
            "person_profiles": "identified_only",
            // Page views are captured by the navigator
            "capture_pageview": false,
            "capture_pageleave": true,
        });
        call_posthog("init", &[JsValue::from_str(api_key), to_js(&options)]);
        Some(Self)
    }
}

impl Analytics for PostHogAnalytics {
    fn is_enabled(&self) -> bool {
        true
    }

    fn identify(&self, user_id: &str, properties: Option<Value>) {
        let mut args = vec![JsValue::from_str(user_id)];
        if let Some(properties) = properties {
            args.push(to_js(&properties));
        }
        call_posthog("identify", &args);
    }

    fn reset(&self) {
        call_posthog("reset", &[]);
    }

    fn capture(&self, event: &str, properties: Option<Value>) {
        let mut args = vec![JsValue::from_str(event)];
        if let Some(properties) = properties {
            args.push(to_js(&properties));
        }
        call_posthog("capture", &args);
    }

    fn capture_page_view(&self, path: &str, route_name: Option<&str>, properties: Option<Value>) {
        log::debug!("[analytics] pageview {} ({:?})", path, route_name);
        let current_url = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let properties = page_view_properties(&current_url, path, route_name, properties);
        self.capture(PAGE_VIEW_EVENT, Some(properties));
    }
}

fn posthog_handle() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("posthog")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<Object>().ok()
}

fn call_posthog(method: &str, args: &[JsValue]) {
    let Some(posthog) = posthog_handle() else {
        return;
    };
    let Some(function) = Reflect::get(&posthog, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        log::warn!("[analytics] posthog.{} is not a function", method);
        return;
    };

    let js_args = Array::new();
    for arg in args {
        js_args.push(arg);
    }
    if let Err(err) = function.apply(&posthog, &js_args) {
        log::error!("[analytics] posthog.{} failed: {:?}", method, err);
    }
}

fn to_js(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}
