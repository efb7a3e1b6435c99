//! HTTP protocol layer module
//!
//! Owns request framing and response serialization, decoupled from the
//! verb-dispatch logic in the handler. Framing lives here rather than in a
//! library so the Content-Length recovery rule can be honored: a malformed
//! value must read as a zero-length body, not reject the request.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{Method, Request};
pub use response::Response;
