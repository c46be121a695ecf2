//! Read-only client for the server's REST API
//!
//! The resolver only depends on the `ChannelApi` trait; `HttpClient` is the
//! production implementation and tests substitute an in-memory fake.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod types;

pub use client::{ChannelApi, HttpClient};
pub use error::{ApiResult, AppError};
pub use types::{Channel, ChannelType, Team};
