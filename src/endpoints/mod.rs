//! Concrete HMRC endpoints.

mod hello;

pub use hello::{HelloApplication, HelloUser, HelloWorld};
