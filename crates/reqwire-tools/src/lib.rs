//! # Reqwire Tools
//!
//! The standard tool library for reqwire: five HTTP verb tools (GET, POST,
//! PUT, PATCH, DELETE) that turn a declarative request description into a
//! single outbound HTTP exchange and summarize the result for the calling
//! agent.
//!
//! ## Layout
//!
//! - [`standard::network`]: request description, body encoding, header
//!   composition, verb execution, and response summarization, plus the
//!   `reqwest`-backed transport (behind the default-on `network` feature)
//! - [`registry`]: an in-memory tool registry for dispatching tool calls
//!
//! The underlying HTTP exchange and the multipart file reads go through
//! capabilities injected via [`HttpContext`], so both are substitutable in
//! tests (see the `reqwire-testing` crate).

/// Tool registry implementations for managing collections of tools.
pub mod registry;
/// Standard tool library.
pub mod standard;

pub use registry::{InMemoryToolRegistry, ToolRegistry};
#[cfg(feature = "network")]
pub use standard::network::ReqwestTransport;
pub use standard::network::{
    FilePartSpec, HttpContext, HttpDeleteTool, HttpGetTool, HttpPatchTool, HttpPostTool,
    HttpPutTool, PartSpec, RequestSpec, execute,
};
pub use reqwire_core::{
    FormPart, FormPayload, HttpResponse, HttpTransport, HttpVerb, InvokeError, RequestOptions,
    ResponseEnvelope, Tool, ToolCall, TransportError,
};
