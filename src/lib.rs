//! Client building blocks for the HMRC (UK tax and revenue) HTTP API.
//!
//! - [`request`]: the [`Request`] builder and the [`Endpoint`] trait
//! - [`response`]: the [`Response`] wrapper
//! - [`fetch`]: the [`fetch::HttpClient`] transport seam
//! - [`helpers`]: date-format validation for values sent to HMRC
//! - [`endpoints`]: concrete endpoints
//! - [`config`]: settings from the environment

pub mod config;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use request::{Endpoint, Environment, Request};
pub use response::Response;
