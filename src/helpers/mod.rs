//! Small stateless helpers used while preparing requests.

pub mod date;

pub use date::{InvalidDateFormat, check_date_string_format};
