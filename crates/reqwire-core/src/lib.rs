//! # Reqwire Core
//!
//! Core traits and types for the reqwire HTTP tool family.
//! This crate defines the seams — the tool contract, the HTTP transport
//! capability, and the file-reading capability — while implementations
//! live in `reqwire-tools`.

pub mod error;
pub mod fs;
pub mod tool;
pub mod transport;

pub use error::{InvokeError, TransportError};
pub use fs::{FileReader, FsFileReader};
pub use tool::{HttpVerb, ResponseEnvelope, Tool, ToolCall};
pub use transport::{FormPart, FormPayload, HttpResponse, HttpTransport, RequestOptions};
