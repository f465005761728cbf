//! # Mock Transport
//!
//! A scripted [`HttpTransport`] implementation that returns predictable
//! responses and records every call it receives, allowing controlled
//! verification of the verb tools' outbound requests.

use async_trait::async_trait;
use reqwire_core::{HttpResponse, HttpTransport, HttpVerb, RequestOptions, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A canned response with a fixed status and a body that either reads
/// successfully or fails on `text()`.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    status_text: String,
    body: Result<String, String>,
}

impl MockResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: Ok(String::new()),
        }
    }

    /// A `200 OK` response with an empty body.
    pub fn ok() -> Self {
        Self::new(200, "OK")
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Ok(body.into());
        self
    }

    /// Make `text()` fail with the given message.
    pub fn with_failing_body(mut self, error: impl Into<String>) -> Self {
        self.body = Err(error.into());
        self
    }
}

#[async_trait]
impl HttpResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn status_text(&self) -> &str {
        &self.status_text
    }

    async fn text(self: Box<Self>) -> Result<String, TransportError> {
        self.body.map_err(TransportError::new)
    }
}

/// One call observed by the mock: the verb, the URL, and the assembled
/// options exactly as the transport received them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: HttpVerb,
    pub url: String,
    pub options: RequestOptions,
}

enum Scripted {
    Response(MockResponse),
    Failure(String),
}

/// A mock transport with a scripted response queue and call recording.
///
/// Scripted entries are consumed in order; once the queue is empty the
/// default response (a `200 OK` with an empty body unless overridden) is
/// returned for every further call.
pub struct MockTransport {
    queue: Mutex<VecDeque<Scripted>>,
    default_response: MockResponse,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_response: MockResponse::ok(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a scripted response.
    pub fn with_response(self, response: MockResponse) -> Self {
        self.queue.lock().unwrap().push_back(Scripted::Response(response));
        self
    }

    /// Queue a transport-level failure.
    pub fn with_transport_failure(self, message: impl Into<String>) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.into()));
        self
    }

    /// Replace the default response used once the queue is empty.
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = response;
        self
    }

    /// Number of calls the transport has received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn was_called_with_url(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| call.url == url)
    }

    /// Clear recorded calls and any remaining scripted responses.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
        self.queue.lock().unwrap().clear();
    }

    async fn handle(
        &self,
        verb: HttpVerb,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            verb,
            url: url.to_string(),
            options,
        });

        match self.queue.lock().unwrap().pop_front() {
            Some(Scripted::Response(response)) => Ok(Box::new(response)),
            Some(Scripted::Failure(message)) => Err(TransportError::new(message)),
            None => Ok(Box::new(self.default_response.clone())),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.handle(HttpVerb::Get, url, options).await
    }

    async fn post(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.handle(HttpVerb::Post, url, options).await
    }

    async fn put(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.handle(HttpVerb::Put, url, options).await
    }

    async fn patch(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.handle(HttpVerb::Patch, url, options).await
    }

    async fn delete(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Box<dyn HttpResponse>, TransportError> {
        self.handle(HttpVerb::Delete, url, options).await
    }
}
