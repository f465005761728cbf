//! # Reqwire Testing
//!
//! Testing utilities for the reqwire HTTP tool family: a scripted
//! [`MockTransport`] that records every call it receives, and an
//! [`InMemoryFileReader`] for multipart file fields, so tool behavior can
//! be verified without a network or a filesystem.

pub mod memory_fs;
pub mod mock_transport;

pub use memory_fs::InMemoryFileReader;
pub use mock_transport::{MockResponse, MockTransport, RecordedCall};
