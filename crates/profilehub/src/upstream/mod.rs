//! Upstream provider implementations.
//!
//! `HttpUpstream` talks to the three providers over HTTP. The stub is a
//! scripted in-process source used by tests.

mod http;
#[cfg(test)]
pub mod stub;

pub use http::HttpUpstream;
