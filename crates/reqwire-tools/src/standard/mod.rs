//! # Standard Tool Library
//!
//! Tools shipped with reqwire. Currently a single category: HTTP/REST
//! request tools under [`network`].

/// HTTP request tools and the transport implementation.
pub mod network;

pub use network::*;
