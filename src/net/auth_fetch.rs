//! Request helper for calls that need the session.
//!
//! Every request goes out with credentials included and a JSON content type
//! (unless the body is multipart or the caller chose a content type). A 401
//! ends the local session and sends the browser to the login page; the 401
//! response is still handed back so the caller can stop what it was doing.

#[cfg(test)]
#[path = "auth_fetch_test.rs"]
mod auth_fetch_test;

use serde::Serialize;

use super::http::{
    APPLICATION_JSON, CONTENT_TYPE, Credentials, FetchError, FetchRequest, FetchResponse, MultipartForm, RequestBody,
};
use crate::config::ClientConfig;
use crate::platform::Platform;
use crate::state::session;

#[derive(Clone, Debug)]
pub struct AuthFetch {
    platform: Platform,
    config: ClientConfig,
}

impl AuthFetch {
    pub fn new(platform: Platform, config: ClientConfig) -> Self {
        Self { platform, config }
    }

    /// Send `request` with session credentials.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors. Every HTTP status, 401 included,
    /// comes back as `Ok`.
    pub async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        let request = prepare(request);
        let method = request.method.as_str();
        let url = request.url.clone();

        let response = self.platform.transport.send(request).await?;
        if response.is_unauthorized() {
            log::warn!("{method} {url} returned 401; ending session");
            session::end_session(&self.platform, &self.config);
        }
        Ok(response)
    }

    /// `GET` an API path.
    ///
    /// # Errors
    ///
    /// See [`AuthFetch::send`].
    pub async fn get(&self, path: &str) -> Result<FetchResponse, FetchError> {
        self.send(FetchRequest::get(self.config.api_url(path))).await
    }

    /// `POST` a JSON body to an API path.
    ///
    /// # Errors
    ///
    /// [`FetchError::Encode`] if `body` fails to serialize, otherwise see
    /// [`AuthFetch::send`].
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<FetchResponse, FetchError> {
        let request = FetchRequest::post(self.config.api_url(path)).body(RequestBody::json(body)?);
        self.send(request).await
    }

    /// `POST` a multipart form to an API path. The browser picks the
    /// boundary, so no content type is set here.
    ///
    /// # Errors
    ///
    /// See [`AuthFetch::send`].
    pub async fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<FetchResponse, FetchError> {
        let request = FetchRequest::post(self.config.api_url(path)).body(RequestBody::Multipart(form));
        self.send(request).await
    }
}

/// Apply the credential and content-type rules. Caller headers are kept.
pub(crate) fn prepare(request: FetchRequest) -> FetchRequest {
    let needs_content_type = !request.body.is_multipart() && request.header_value(CONTENT_TYPE).is_none();
    let mut request = request.credentials(Credentials::Include);
    if needs_content_type {
        request = request.header(CONTENT_TYPE, APPLICATION_JSON);
    }
    request
}
