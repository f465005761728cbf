//! # HTTP Verb Tools
//!
//! The five [`Tool`] implementations. Each tool parses its input as a
//! [`RequestSpec`] JSON document and runs the shared execution pipeline
//! against the injected [`HttpContext`]. GET and DELETE also accept a
//! bare URL as input.

use super::invoke::{HttpContext, execute};
use super::spec::RequestSpec;
use reqwire_core::{HttpVerb, ResponseEnvelope, Tool};
use std::future::Future;

/// Execute an async operation using the current runtime or creating a new
/// one. Returns an error envelope instead of panicking if runtime
/// creation fails.
fn run_async<F, Fut>(f: F) -> ResponseEnvelope
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ResponseEnvelope>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(f()))
    } else {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(f()),
            Err(e) => ResponseEnvelope::error(format!("Failed to create async runtime: {e}")),
        }
    }
}

/// Parse tool input strictly as a `RequestSpec` document.
fn parse_input(input: &str) -> Result<RequestSpec, ResponseEnvelope> {
    serde_json::from_str(input)
        .map_err(|e| ResponseEnvelope::error(format!("Invalid request JSON: {e}")))
}

/// Parse tool input, falling back to treating it as a bare URL.
fn parse_input_or_url(input: String) -> RequestSpec {
    match serde_json::from_str(&input) {
        Ok(spec) => spec,
        Err(_) => RequestSpec::new(input),
    }
}

/// HTTP GET tool for retrieving resources.
pub struct HttpGetTool {
    ctx: HttpContext,
}

impl HttpGetTool {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, spec: &RequestSpec) -> ResponseEnvelope {
        execute(HttpVerb::Get, spec, &self.ctx).await
    }
}

impl Tool for HttpGetTool {
    fn name(&self) -> &str {
        HttpVerb::Get.tool_name()
    }

    fn description(&self) -> &str {
        "Perform an HTTP GET request and summarize the response"
    }

    fn call(&self, input: String) -> ResponseEnvelope {
        let spec = parse_input_or_url(input);
        run_async(|| self.execute(&spec))
    }
}

/// HTTP POST tool for creating resources. Supports JSON and multipart
/// bodies.
pub struct HttpPostTool {
    ctx: HttpContext,
}

impl HttpPostTool {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, spec: &RequestSpec) -> ResponseEnvelope {
        execute(HttpVerb::Post, spec, &self.ctx).await
    }
}

impl Tool for HttpPostTool {
    fn name(&self) -> &str {
        HttpVerb::Post.tool_name()
    }

    fn description(&self) -> &str {
        "Perform an HTTP POST request with a JSON or multipart body"
    }

    fn call(&self, input: String) -> ResponseEnvelope {
        let spec = match parse_input(&input) {
            Ok(spec) => spec,
            Err(envelope) => return envelope,
        };
        run_async(|| self.execute(&spec))
    }
}

/// HTTP PUT tool for replacing resources.
pub struct HttpPutTool {
    ctx: HttpContext,
}

impl HttpPutTool {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, spec: &RequestSpec) -> ResponseEnvelope {
        execute(HttpVerb::Put, spec, &self.ctx).await
    }
}

impl Tool for HttpPutTool {
    fn name(&self) -> &str {
        HttpVerb::Put.tool_name()
    }

    fn description(&self) -> &str {
        "Perform an HTTP PUT request with a JSON body"
    }

    fn call(&self, input: String) -> ResponseEnvelope {
        let spec = match parse_input(&input) {
            Ok(spec) => spec,
            Err(envelope) => return envelope,
        };
        run_async(|| self.execute(&spec))
    }
}

/// HTTP PATCH tool for partial updates.
pub struct HttpPatchTool {
    ctx: HttpContext,
}

impl HttpPatchTool {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, spec: &RequestSpec) -> ResponseEnvelope {
        execute(HttpVerb::Patch, spec, &self.ctx).await
    }
}

impl Tool for HttpPatchTool {
    fn name(&self) -> &str {
        HttpVerb::Patch.tool_name()
    }

    fn description(&self) -> &str {
        "Perform an HTTP PATCH request with a JSON body"
    }

    fn call(&self, input: String) -> ResponseEnvelope {
        let spec = match parse_input(&input) {
            Ok(spec) => spec,
            Err(envelope) => return envelope,
        };
        run_async(|| self.execute(&spec))
    }
}

/// HTTP DELETE tool for removing resources.
pub struct HttpDeleteTool {
    ctx: HttpContext,
}

impl HttpDeleteTool {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self, spec: &RequestSpec) -> ResponseEnvelope {
        execute(HttpVerb::Delete, spec, &self.ctx).await
    }
}

impl Tool for HttpDeleteTool {
    fn name(&self) -> &str {
        HttpVerb::Delete.tool_name()
    }

    fn description(&self) -> &str {
        "Perform an HTTP DELETE request and summarize the response"
    }

    fn call(&self, input: String) -> ResponseEnvelope {
        let spec = parse_input_or_url(input);
        run_async(|| self.execute(&spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_input_becomes_a_spec() {
        let spec = parse_input_or_url("https://api.test/items".to_string());
        assert_eq!(spec.url, "https://api.test/items");
        assert!(spec.headers.is_empty());
    }

    #[test]
    fn structured_input_is_preferred_over_the_fallback() {
        let spec =
            parse_input_or_url(r#"{"url":"https://api.test","token":"t0k3n"}"#.to_string());
        assert_eq!(spec.url, "https://api.test");
        assert_eq!(spec.token.as_deref(), Some("t0k3n"));
    }

    #[test]
    fn strict_parse_reports_the_json_error() {
        let envelope = parse_input("not json").unwrap_err();
        assert!(envelope.is_error());
        assert!(
            envelope
                .error_message()
                .unwrap()
                .starts_with("Invalid request JSON:")
        );
    }
}
