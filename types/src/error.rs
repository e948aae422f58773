//! Errors returned by guarded mixer operations.

use crate::channel::ChannelId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixerError {
    /// The mic channel cannot be added twice or removed.
    #[error("the mic channel is fixed and cannot be added or removed")]
    MicRequired,

    #[error("channel {0} is already in the mixer")]
    DuplicateChannel(ChannelId),

    #[error("the mixer already holds the maximum of {max} channels")]
    ChannelLimit { max: usize },

    /// A reorder that would move the mic or drop/duplicate channels.
    #[error("invalid channel order: {0}")]
    InvalidOrder(String),
}

pub type Result<T> = std::result::Result<T, MixerError>;
