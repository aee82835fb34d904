//! Shared substrate: labeled long-format tables and error types.

mod errors;
mod table;

pub use errors::{ErrorKind, TopsisError};
pub use table::{LabeledEntry, Table};
