//! # Network Operations
//!
//! HTTP request tools: a declarative request description ([`RequestSpec`])
//! is encoded, assembled, executed against the injected transport, and
//! summarized into a [`ResponseEnvelope`](reqwire_core::ResponseEnvelope).
//! The per-verb [`Tool`](reqwire_core::Tool) implementations live in
//! [`http`].

pub(crate) mod body;
/// HTTP verb tools for REST API interactions.
pub mod http;
/// Verb execution pipeline and execution context.
pub mod invoke;
pub(crate) mod request;
/// Declarative request description.
pub mod spec;
pub(crate) mod summary;

#[cfg(feature = "network")]
/// `reqwest`-backed transport implementation.
pub mod client;

#[cfg(feature = "network")]
pub use client::ReqwestTransport;
pub use http::{HttpDeleteTool, HttpGetTool, HttpPatchTool, HttpPostTool, HttpPutTool};
pub use invoke::{HttpContext, execute};
pub use spec::{FilePartSpec, PartSpec, RequestSpec};
