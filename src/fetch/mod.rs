//! HTTP transport used by requests.
//!
//! [`HttpClient`] is the seam a request fires through; [`BasicClient`] is the
//! `reqwest`-backed implementation every request gets unless another one is
//! injected.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;
