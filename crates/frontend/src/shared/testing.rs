//! In-memory doubles for the browser seams, used by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::shared::analytics::Analytics;
use crate::shared::http::{ApiError, HttpTransport, PreparedRequest, RawResponse};
use crate::shared::storage::{CookieJar, KeyValueStore};

/// Transport that replays queued responses in order and records requests.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Cookie jar that understands `name=value` and 1970 expiry deletes.
#[derive(Default)]
pub struct MemoryCookies {
    cookies: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryCookies {
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let jar = Self::default();
        jar.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        jar
    }

    pub fn insert(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .filter(|v| !v.is_empty())
    }

    fn set_raw(&self, cookie: &str) {
        self.writes.lock().unwrap().push(cookie.to_string());
        let Some((name, rest)) = cookie.split_once('=') else {
            return;
        };
        let value = rest.split(';').next().unwrap_or_default();
        let mut cookies = self.cookies.lock().unwrap();
        if value.is_empty() || cookie.contains("01 Jan 1970") {
            cookies.remove(name);
        } else {
            cookies.insert(name.to_string(), value.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsCall {
    Identify(String),
    Reset,
    Capture(String, Option<Value>),
    PageView {
        path: String,
        route_name: Option<String>,
        properties: Option<Value>,
    },
}

#[derive(Default)]
pub struct RecordingAnalytics {
    calls: Mutex<Vec<AnalyticsCall>>,
}

impl RecordingAnalytics {
    pub fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Analytics for RecordingAnalytics {
    fn is_enabled(&self) -> bool {
        true
    }

    fn identify(&self, user_id: &str, _properties: Option<Value>) {
        self.calls
            .lock()
            .unwrap()
            .push(AnalyticsCall::Identify(user_id.to_string()));
    }

    fn reset(&self) {
        self.calls.lock().unwrap().push(AnalyticsCall::Reset);
    }

    fn capture(&self, event: &str, properties: Option<Value>) {
        self.calls
            .lock()
            .unwrap()
            .push(AnalyticsCall::Capture(event.to_string(), properties));
    }

    fn capture_page_view(&self, path: &str, route_name: Option<&str>, properties: Option<Value>) {
        self.calls.lock().unwrap().push(AnalyticsCall::PageView {
            path: path.to_string(),
            route_name: route_name.map(str::to_string),
            properties,
        });
    }
}
