//! Channel argument resolution
//!
//! Commands accept channels either by id or as `team:channel-name`. This
//! module turns such arguments into channel records and reports every
//! argument that could not be resolved.

mod reference;
mod resolver;
mod summary;

pub use reference::ChannelReference;
pub use resolver::{resolve_channel, resolve_channels, resolve_channels_concurrently};
pub use summary::{
    FailureKind, ResolutionError, ResolutionSummary, STATUS_CLASSIFICATION, classify, failure_kind,
};
