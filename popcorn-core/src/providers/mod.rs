//! Metadata API plumbing.

pub mod endpoints;
pub mod http;
pub mod payloads;
pub mod transport;
