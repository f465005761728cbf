//! Verb execution.
//!
//! One linear pipeline per invocation: assemble options (which may
//! short-circuit on body validation or a file read), perform exactly one
//! transport call, summarize the response. [`execute`] is the safe
//! execution wrapper shared by every verb tool — any pipeline error is
//! converted into an error envelope.

use super::body::{encode_multipart, parse_value, validate_value};
use super::request::compose_headers;
use super::spec::RequestSpec;
use super::summary::summarize;
use reqwire_core::fs::{FileReader, FsFileReader};
use reqwire_core::{HttpTransport, HttpVerb, InvokeError, RequestOptions, ResponseEnvelope};
use std::sync::Arc;

/// Injected execution context shared by the verb tools: the HTTP
/// capability and the file reader used for multipart materialization.
#[derive(Clone)]
pub struct HttpContext {
    transport: Arc<dyn HttpTransport>,
    files: Arc<dyn FileReader>,
}

impl HttpContext {
    /// Create a context with the default `std::fs`-backed file reader.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            files: Arc::new(FsFileReader),
        }
    }

    /// Substitute the file-reading capability.
    pub fn with_file_reader(mut self, files: Arc<dyn FileReader>) -> Self {
        self.files = files;
        self
    }
}

/// Execute one request and normalize any failure into an error envelope.
pub async fn execute(verb: HttpVerb, spec: &RequestSpec, ctx: &HttpContext) -> ResponseEnvelope {
    match invoke(verb, spec, ctx).await {
        Ok(lines) => ResponseEnvelope::success(lines),
        Err(err) => ResponseEnvelope::error(err.to_string()),
    }
}

async fn invoke(
    verb: HttpVerb,
    spec: &RequestSpec,
    ctx: &HttpContext,
) -> Result<Vec<String>, InvokeError> {
    tracing::debug!(verb = verb.as_str(), url = %spec.url, "dispatching HTTP request");
    let options = assemble(verb, spec, ctx.files.as_ref())?;

    let transport = ctx.transport.as_ref();
    let response = match verb {
        HttpVerb::Get => transport.get(&spec.url, options).await?,
        HttpVerb::Post => transport.post(&spec.url, options).await?,
        HttpVerb::Put => transport.put(&spec.url, options).await?,
        HttpVerb::Patch => transport.patch(&spec.url, options).await?,
        HttpVerb::Delete => transport.delete(&spec.url, options).await?,
    };

    Ok(summarize(verb, &spec.url, response).await)
}

/// Build the per-request options. GET and DELETE never attach a body.
/// POST encodes multipart-or-JSON; PUT and PATCH validate JSON-looking
/// strings but send the original value.
fn assemble(
    verb: HttpVerb,
    spec: &RequestSpec,
    files: &dyn FileReader,
) -> Result<RequestOptions, InvokeError> {
    let options = match verb {
        HttpVerb::Get | HttpVerb::Delete => RequestOptions {
            headers: compose_headers(spec, false),
            ..RequestOptions::default()
        },
        HttpVerb::Post => {
            if let Some(parts) = &spec.multipart {
                RequestOptions {
                    headers: compose_headers(spec, false),
                    data: None,
                    multipart: Some(encode_multipart(parts, files)?),
                }
            } else if let Some(value) = &spec.value {
                RequestOptions {
                    headers: compose_headers(spec, true),
                    data: Some(parse_value(value)?),
                    multipart: None,
                }
            } else {
                RequestOptions {
                    headers: compose_headers(spec, false),
                    ..RequestOptions::default()
                }
            }
        }
        HttpVerb::Put | HttpVerb::Patch => {
            if let Some(value) = &spec.value {
                validate_value(value)?;
                RequestOptions {
                    headers: compose_headers(spec, true),
                    data: Some(value.clone()),
                    multipart: None,
                }
            } else {
                RequestOptions {
                    headers: compose_headers(spec, false),
                    ..RequestOptions::default()
                }
            }
        }
    };
    Ok(options)
}
