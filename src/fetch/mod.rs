//! HTTP retrieval of the two sheet tabs.
//!
//! The one async, fallible layer of the crate. Everything below it is pure;
//! everything above it is the CLI. Transport failure is the only error this
//! crate ever escalates.

mod client;
mod constants;
mod error;

pub use client::SheetsClient;
pub use constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
pub use error::FetchError;
