//! Core domain types for URL screening.

pub mod error;

pub use error::{MalwareUrlError, MALWARE_URL_MESSAGE};
