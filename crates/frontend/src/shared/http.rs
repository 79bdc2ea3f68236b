//! Thin JSON client over `gloo-net` shared by every domain API.
//!
//! All backend failures are mapped to [`ApiError`]: transport failures become
//! `Network`, non-2xx responses become `Http` with the backend `detail` when present,
//! unexpected bodies become `Decode`. Nothing is retried.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_base;

/// Write verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
    Patch,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Patch => Request::patch(url),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
        }
    }
}

/// Handle to the backend. Cheap to clone; one instance is provided as context by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Backend at the address configured for this build.
    pub fn from_env() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET` a JSON document. A 404 is reported as [`ApiError::NotFound`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        log::debug!("GET {}", path);
        let response = Request::get(&self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;
        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }
        decode_json(response, fallback).await
    }

    /// Send a JSON body and decode the JSON answer.
    pub async fn send_json<B, T>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(verb, path, body).await?;
        decode_json(response, fallback).await
    }

    /// Send a JSON body; the answer body is ignored.
    pub async fn send_json_ack<B>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(verb, path, body).await?;
        ensure_success(response, fallback).await
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        log::debug!("DELETE {}", path);
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(network_error)?;
        ensure_success(response, fallback).await
    }

    async fn send<B>(&self, verb: Verb, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("{} {}", verb.as_str(), path);
        verb.builder(&self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)
    }
}

/// Provide the backend handle to the component tree.
pub fn provide_backend(backend: HttpBackend) {
    provide_context(backend);
}

/// Hook to access the backend handle
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>().expect("provide_backend was not called")
}

fn network_error(e: gloo_net::Error) -> ApiError {
    log::warn!("Backend unreachable: {}", e);
    ApiError::Network(e.to_string())
}

async fn error_from(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} -> HTTP {}: {}", response.url(), status, body);
    ApiError::from_response(status, &body, fallback)
}

async fn ensure_success(response: Response, fallback: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response, fallback).await)
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response, fallback).await);
    }
    let text = response.text().await.map_err(network_error)?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("Unexpected response body: {}", e);
        ApiError::Decode(e.to_string())
    })
}
