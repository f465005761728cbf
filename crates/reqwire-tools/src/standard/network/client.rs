//! `reqwest`-backed HTTP transport.
//!
//! Implements the [`HttpTransport`] capability. Timeouts live here, not in
//! the tool layer: a transport constructed with [`ReqwestTransport::with_timeout`]
//! applies it per request. JSON string bodies reach the wire verbatim;
//! structured values are serialized. Multipart parts become
//! `reqwest::multipart` parts with file name and mime type.

use async_trait::async_trait;
use reqwest::{Client, Method, multipart};
use reqwire_core::{
    FormPayload, HttpResponse, HttpTransport, RequestOptions, TransportError,
};
use serde_json::Value;
use std::time::Duration;

/// HTTP transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
        }
    }

    /// Apply a per-request timeout to every exchange.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        let mut request = self.client.request(method, url);

        for (key, value) in &options.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        if let Some(parts) = options.multipart {
            let mut form = multipart::Form::new();
            for part in parts {
                form = match part.payload {
                    FormPayload::File {
                        name,
                        mime_type,
                        buffer,
                    } => {
                        let file = multipart::Part::bytes(buffer)
                            .file_name(name)
                            .mime_str(&mime_type)
                            .map_err(|e| {
                                TransportError::new(format!("Invalid mime type '{mime_type}': {e}"))
                            })?;
                        form.part(part.field, file)
                    }
                    FormPayload::Text(value) => form.text(part.field, form_text_value(&value)),
                };
            }
            request = request.multipart(form);
        } else if let Some(data) = options.data {
            let body = match data {
                // Raw string bodies go out verbatim.
                Value::String(raw) => raw,
                other => serde_json::to_string(&other)
                    .map_err(|e| TransportError::new(format!("Unserializable body: {e}")))?,
            };
            request = request.body(body);
        }

        match request.send().await {
            Ok(response) => Ok(Box::new(ReqwestResponse { inner: response })),
            Err(e) => Err(TransportError::new(format!("HTTP request failed: {e}"))),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.send(Method::GET, url, options).await
    }

    async fn post(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.send(Method::POST, url, options).await
    }

    async fn put(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.send(Method::PUT, url, options).await
    }

    async fn patch(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.send(Method::PATCH, url, options).await
    }

    async fn delete(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.send(Method::DELETE, url, options).await
    }
}

/// Render a scalar form field the way a form submission would.
fn form_text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

struct ReqwestResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn status_text(&self) -> &str {
        self.inner.status().canonical_reason().unwrap_or_default()
    }

    async fn text(self: Box<Self>) -> Result<String, TransportError> {
        self.inner
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))
    }
}
