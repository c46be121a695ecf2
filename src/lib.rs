pub mod api;
pub mod channels;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{MmctlError, Result};
