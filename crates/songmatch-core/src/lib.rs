//! Shared plumbing for the songmatch feature crates
//!
//! Each endpoint crate owns its error enum; this crate gives them a common
//! `{"error": ...}` envelope, a JSON body extractor, the outbound HTTP
//! client, and [`Lookup`] for walking loosely shaped upstream JSON.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod lookup;
mod request;

pub use error::{ErrorBody, HttpError, error_response};
pub use http_client::http_client;
pub use lookup::Lookup;
pub use request::{ExtractPayload, PayloadRejection};
