//! Drag-to-reorder session for channel strips.
//!
//! A session moves `Idle -> Dragging -> Idle`. Leaving `Dragging` either
//! commits a new order (to be applied as one `MixerAction::Reorder`) or
//! cancels with no effect. The mic sits at index 0 and never moves.

use crate::channel::ChannelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderState {
    #[default]
    Idle,
    Dragging {
        channel: ChannelId,
        /// Index the channel would occupy if dropped now
        target: usize,
    },
}

impl ReorderState {
    /// Start dragging `channel`. Refused for the mic and for ids not in `order`.
    pub fn begin(&mut self, channel: ChannelId, order: &[ChannelId]) -> bool {
        if channel.is_mic() {
            return false;
        }
        let Some(index) = order.iter().position(|id| *id == channel) else {
            return false;
        };
        *self = Self::Dragging {
            channel,
            target: index,
        };
        tracing::debug!("Started dragging channel {} from index {}", channel, index);
        true
    }

    /// Move the drop target. Index 0 belongs to the mic and is never a target.
    pub fn hover(&mut self, index: usize, len: usize) {
        if let Self::Dragging { target, .. } = self {
            *target = index.clamp(1, len.saturating_sub(1).max(1));
        }
    }

    /// Finish the session and return the new order, if it changed.
    pub fn commit(&mut self, order: &[ChannelId]) -> Option<Vec<ChannelId>> {
        let Self::Dragging { channel, target } = std::mem::take(self) else {
            return None;
        };
        let from = order.iter().position(|id| *id == channel)?;
        let target = target.clamp(1, order.len().saturating_sub(1).max(1));
        if from == target {
            return None;
        }

        let mut reordered = order.to_vec();
        let moved = reordered.remove(from);
        reordered.insert(target, moved);
        tracing::debug!("Committed drag of {} from {} to {}", channel, from, target);
        Some(reordered)
    }

    /// Abort the session without changing anything.
    pub fn cancel(&mut self) {
        if let Self::Dragging { channel, .. } = std::mem::take(self) {
            tracing::debug!("Cancelled drag of {}", channel);
        }
    }

    /// Channel currently being dragged.
    pub fn dragging(&self) -> Option<ChannelId> {
        match self {
            Self::Dragging { channel, .. } => Some(*channel),
            Self::Idle => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Dragging { target, .. } => Some(*target),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ChannelId::*;

    #[test]
    fn test_mic_cannot_be_dragged() {
        let mut state = ReorderState::default();
        assert!(!state.begin(Mic, &[Mic, System]));
        assert_eq!(state, ReorderState::Idle);
    }

    #[test]
    fn test_unknown_channel_cannot_be_dragged() {
        let mut state = ReorderState::default();
        assert!(!state.begin(Game, &[Mic, System]));
        assert_eq!(state.dragging(), None);
    }

    #[test]
    fn test_commit_moves_channel_to_target() {
        let order = [Mic, System, Browser, Game];
        let mut state = ReorderState::default();
        assert!(state.begin(Game, &order));
        state.hover(1, order.len());

        assert_eq!(state.commit(&order), Some(vec![Mic, Game, System, Browser]));
        assert_eq!(state, ReorderState::Idle);
    }

    #[test]
    fn test_target_never_displaces_mic() {
        let order = [Mic, System, Browser];
        let mut state = ReorderState::default();
        state.begin(Browser, &order);
        state.hover(0, order.len());
        assert_eq!(state.target(), Some(1));
        state.hover(9, order.len());
        assert_eq!(state.target(), Some(2));
    }

    #[test]
    fn test_cancel_discards_session() {
        let order = [Mic, System, Browser];
        let mut state = ReorderState::default();
        state.begin(Browser, &order);
        state.hover(1, order.len());
        state.cancel();

        assert_eq!(state, ReorderState::Idle);
        assert_eq!(state.commit(&order), None);
    }

    #[test]
    fn test_drop_in_place_is_not_a_change() {
        let order = [Mic, System, Browser];
        let mut state = ReorderState::default();
        state.begin(System, &order);
        assert_eq!(state.commit(&order), None);
    }
}
