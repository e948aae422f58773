//! Shared types for the Mixdeck audio mixer mockup.
//!
//! This crate holds the toolkit-independent model: channels, buses, the
//! single state container and the reorder session. The frontend renders it.

pub mod catalog;
pub mod channel;
pub mod defaults;
pub mod error;
pub mod mixer;
pub mod reorder;

// Re-export commonly used types
pub use catalog::Catalog;
pub use channel::{
    Bus, BusLevel, Channel, ChannelId, ChannelPreset, MasterBus, Routing, ADDABLE_CHANNEL_IDS,
};
pub use error::MixerError;
pub use mixer::{MixerAction, MixerState};
pub use reorder::ReorderState;
