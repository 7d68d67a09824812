//! Transport-level HTTP model shared by the API helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything above this module builds a `FetchRequest` and reads a
//! `FetchResponse`; only the `Transport` implementation touches the browser.
//! In `csr` builds that is `GlooTransport`. Other builds get
//! `OfflineTransport`, which fails every request.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Failure to complete a request. HTTP error statuses are not errors here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, DNS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Cookie forwarding policy, mirroring the Fetch API `credentials` option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    #[default]
    SameOrigin,
    Include,
}

/// One field of a multipart form body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { file_name: String, content_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File { file_name: file_name.into(), content_type: content_type.into(), bytes },
        ));
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Pre-serialized text, usually JSON.
    Text(String),
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Serialize `value` as a JSON text body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Encode`] if serialization fails.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, FetchError> {
        serde_json::to_string(value)
            .map(Self::Text)
            .map_err(|e| FetchError::Encode(e.to_string()))
    }

    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub credentials: Credentials,
}

impl FetchRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), ..Self::default() }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for 2xx statuses.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Sends a fully prepared request. Implementations apply every field of the
/// request as given and add nothing of their own.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError>;
}

/// Transport for builds without a browser. Every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        Err(FetchError::Transport(format!("{} {}: not available outside the browser", request.method.as_str(), request.url)))
    }
}

/// Browser `fetch` via `gloo-net`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        use gloo_net::http::{Method as GlooMethod, RequestBuilder};
        use web_sys::RequestCredentials;

        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Patch => GlooMethod::PATCH,
            Method::Delete => GlooMethod::DELETE,
        };
        let credentials = match request.credentials {
            Credentials::Omit => RequestCredentials::Omit,
            Credentials::SameOrigin => RequestCredentials::SameOrigin,
            Credentials::Include => RequestCredentials::Include,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method).credentials(credentials);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Text(text) => builder.body(text),
            RequestBody::Multipart(form) => builder.body(form_data(&form)?),
        }
        .map_err(|e| FetchError::Encode(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(FetchResponse { status, body })
    }
}

#[cfg(feature = "csr")]
fn form_data(form: &MultipartForm) -> Result<web_sys::FormData, FetchError> {
    let encode = |e: wasm_bindgen::JsValue| FetchError::Encode(format!("{e:?}"));
    let data = web_sys::FormData::new().map_err(encode)?;
    for (name, value) in &form.fields {
        match value {
            FormValue::Text(text) => data.append_with_str(name, text).map_err(encode)?,
            FormValue::File { file_name, content_type, bytes } => {
                let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(encode)?;
                data.append_with_blob_and_filename(name, &blob, file_name).map_err(encode)?;
            }
        }
    }
    Ok(data)
}
