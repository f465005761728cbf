//! The external HTTP capability seam.
//!
//! [`HttpTransport`] is the injected dependency that performs the actual
//! network exchange: one method per verb, each taking a URL and the
//! assembled [`RequestOptions`] and resolving to an [`HttpResponse`].
//! Implementations own connection handling, timeouts, and cancellation —
//! none of that exists at the tool layer.

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Assembled per-request options handed to the transport.
///
/// At most one of `data` and `multipart` is set. A `data` value of
/// `Value::String` must reach the wire verbatim; any other value is
/// serialized as JSON by the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: HashMap<String, String>,
    pub data: Option<Value>,
    pub multipart: Option<Vec<FormPart>>,
}

/// A single materialized multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub field: String,
    pub payload: FormPayload,
}

/// Payload of a multipart form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPayload {
    /// A file field: bytes read from disk at call time, with the resolved
    /// file name and mime type.
    File {
        name: String,
        mime_type: String,
        buffer: Vec<u8>,
    },
    /// A scalar field passed through unchanged (string, number, boolean,
    /// or null).
    Text(Value),
}

impl FormPart {
    pub fn file(
        field: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        buffer: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            payload: FormPayload::File {
                name: name.into(),
                mime_type: mime_type.into(),
                buffer,
            },
        }
    }

    pub fn text(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            payload: FormPayload::Text(value),
        }
    }
}

/// A live HTTP response obtained from the transport.
///
/// Status and status text are available synchronously; the body is read
/// once, consuming the response. The body read may fail independently of
/// the exchange having succeeded.
#[async_trait]
pub trait HttpResponse: Send {
    /// Numeric status code.
    fn status(&self) -> u16;

    /// Reason phrase, empty when the protocol or code carries none.
    fn status_text(&self) -> &str;

    /// Read the textual response body, consuming the response.
    async fn text(self: Box<Self>) -> Result<String, TransportError>;
}

/// The injected HTTP execution capability.
///
/// One method per verb. Every call performs exactly one network exchange;
/// retries, pooling, and caching are out of scope for callers of this
/// trait.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError>;

    async fn post(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError>;

    async fn put(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError>;

    async fn patch(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError>;

    async fn delete(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticResponse {
        status: u16,
        status_text: &'static str,
        body: &'static str,
    }

    #[async_trait]
    impl HttpResponse for StaticResponse {
        fn status(&self) -> u16 {
            self.status
        }

        fn status_text(&self) -> &str {
            self.status_text
        }

        async fn text(self: Box<Self>) -> Result<String, TransportError> {
            Ok(self.body.to_string())
        }
    }

    #[tokio::test]
    async fn response_trait_is_object_safe() {
        let response: Box<dyn HttpResponse> = Box::new(StaticResponse {
            status: 204,
            status_text: "No Content",
            body: "",
        });
        assert_eq!(response.status(), 204);
        assert_eq!(response.status_text(), "No Content");
        assert_eq!(response.text().await.unwrap(), "");
    }

    #[test]
    fn options_default_is_empty() {
        let options = RequestOptions::default();
        assert!(options.headers.is_empty());
        assert!(options.data.is_none());
        assert!(options.multipart.is_none());
    }

    #[test]
    fn form_part_constructors() {
        let file = FormPart::file("attachment", "a.bin", "application/octet-stream", vec![1]);
        assert_eq!(file.field, "attachment");
        assert!(matches!(file.payload, FormPayload::File { .. }));

        let text = FormPart::text("note", Value::from("hi"));
        assert_eq!(text.payload, FormPayload::Text(Value::from("hi")));
    }
}
