//! Thin JSON client over the browser `fetch` API.
//!
//! Requests are described by [`RequestOptions`], turned into a
//! [`PreparedRequest`] against the configured base URL and sent through an
//! [`HttpTransport`]. Responses are normalized into [`ApiBody`] and then
//! decoded into typed values with serde, so malformed backend payloads fail
//! at this boundary instead of leaking into UI state.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::shared::api_utils::resolve_api_path;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("API request failed (status {status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Methods that send a JSON body when one is given.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// Caller side description of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub include_credentials: bool,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body text as read off the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Successful response body after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Only a zero-length body is empty. Whitespace is kept as text.
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            return ApiBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ApiBody::Json(value),
            Err(_) => ApiBody::Text(text),
        }
    }

    /// Decode into `T`. An empty body decodes to `None`; plain text is only
    /// accepted by types that deserialize from a JSON string.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        let value = match self {
            ApiBody::Empty => return Ok(None),
            ApiBody::Json(value) => value,
            ApiBody::Text(text) => Value::String(text),
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

/// JSON API client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        resolve_api_path(&self.base_url, path)
    }

    pub fn prepare(&self, path: &str, options: RequestOptions) -> Result<PreparedRequest, ApiError> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            set_header(&mut headers, &name, &value);
        }

        let body = match options.body {
            Some(value) if options.method.carries_body() => {
                set_header(&mut headers, "Content-Type", "application/json");
                Some(serde_json::to_string(&value).map_err(|e| ApiError::Encode(e.to_string()))?)
            }
            _ => None,
        };

        Ok(PreparedRequest {
            method: options.method,
            url: self.url_for(path),
            headers,
            body,
            include_credentials: true,
        })
    }

    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiBody, ApiError> {
        let request = self.prepare(path, options)?;
        log::debug!("[api] {} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(ApiBody::from_text(response.body))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        self.request(path, RequestOptions::get()).await?.decode()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let options = RequestOptions::post().with_json(body)?;
        self.request(path, options).await?.decode()
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        Some(entry) => entry.1 = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
        ApiClient::new("https://nearhear.app/", transport.clone())
    }

    #[test]
    fn test_get_has_default_headers_and_credentials() {
        let transport = Arc::new(ScriptedTransport::new());
        let request = client(&transport).prepare("/media/getSupportedCities", RequestOptions::get()).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://nearhear.app/media/getSupportedCities");
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("content-type"), None);
        assert!(request.include_credentials);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let transport = Arc::new(ScriptedTransport::new());
        let options = RequestOptions::get()
            .with_header("Accept", "text/plain")
            .with_header("X-Trace", "1");
        let request = client(&transport).prepare("x", options).unwrap();

        assert_eq!(request.header("Accept"), Some("text/plain"));
        assert_eq!(request.header("X-Trace"), Some("1"));
        assert_eq!(request.headers.len(), 2);
    }

    #[test]
    fn test_json_body_only_for_body_methods() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport);

        let post = api
            .prepare("/admin/login", RequestOptions::post().with_json(&json!({"a": 1})).unwrap())
            .unwrap();
        assert_eq!(post.header("Content-Type"), Some("application/json"));
        assert_eq!(post.body.as_deref(), Some(r#"{"a":1}"#));

        let delete = api
            .prepare(
                "/thing",
                RequestOptions::default()
                    .with_method(HttpMethod::Delete)
                    .with_json(&json!({"a": 1}))
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(delete.header("Content-Type"), None);
        assert!(delete.body.is_none());

        let empty_post = api.prepare("/admin/logout", RequestOptions::post()).unwrap();
        assert_eq!(empty_post.header("Content-Type"), None);
    }

    #[test]
    fn test_error_status_embeds_status_and_body() {
        let transport = Arc::new(ScriptedTransport::new().respond(404, "not found"));
        let err = block_on(client(&transport).request("/missing", RequestOptions::get())).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                body: "not found".to_string()
            }
        );
    }

    #[test]
    fn test_empty_body_is_absent() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "").respond(204, ""));
        let api = client(&transport);

        assert_eq!(block_on(api.request("/a", RequestOptions::get())).unwrap(), ApiBody::Empty);
        let decoded: Option<Vec<String>> = block_on(api.get_json("/b")).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_whitespace_body_is_not_empty() {
        assert_eq!(ApiBody::from_text("  ".to_string()), ApiBody::Text("  ".to_string()));
        assert_eq!(ApiBody::from_text(" [1] ".to_string()), ApiBody::Json(serde_json::json!([1])));
    }

    #[test]
    fn test_non_json_body_is_returned_as_text() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "ok").respond(200, "ok"));
        let api = client(&transport);

        assert_eq!(
            block_on(api.request("/a", RequestOptions::get())).unwrap(),
            ApiBody::Text("ok".to_string())
        );
        let text: Option<String> = block_on(api.get_json("/a")).unwrap();
        assert_eq!(text.as_deref(), Some("ok"));
    }

    #[test]
    fn test_mismatched_json_is_a_decode_error() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, r#"{"unexpected": true}"#));
        let result: Result<Option<Vec<String>>, ApiError> = block_on(client(&transport).get_json("/a"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_transport_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::new().fail("connection refused"));
        let err = block_on(client(&transport).request("/a", RequestOptions::get())).unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));
        assert_eq!(transport.call_count(), 1);
    }
}
