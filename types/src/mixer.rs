//! Mixer state container.
//!
//! `MixerState` is the single writer for every channel and master bus. The
//! frontend never mutates it directly: components emit [`MixerAction`]s and the
//! application root feeds them through [`MixerState::apply`].

use crate::channel::{Bus, Channel, ChannelId, MasterBus, Routing, ADDABLE_CHANNEL_IDS};
use crate::defaults::{clamp_volume, MAX_CHANNELS};
use crate::error::{MixerError, Result};

/// Every change the UI can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixerAction {
    SetVolume {
        channel: ChannelId,
        bus: Bus,
        value: u8,
    },
    ToggleMute {
        channel: ChannelId,
        bus: Bus,
    },
    SetInputDevice {
        channel: ChannelId,
        device: String,
    },
    SetApplications {
        channel: ChannelId,
        applications: Vec<String>,
    },
    AddChannel(ChannelId),
    DeleteChannel(ChannelId),
    /// Replace the channel order with a committed drag result
    Reorder(Vec<ChannelId>),
    SetMasterVolume {
        bus: Bus,
        value: u8,
    },
    ToggleMasterMute(Bus),
    SetMasterOutput {
        bus: Bus,
        device: String,
    },
}

/// Everything the mixer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixerState {
    channels: Vec<Channel>,
    pub monitor: MasterBus,
    pub stream: MasterBus,
}

impl Default for MixerState {
    fn default() -> Self {
        Self::new()
    }
}

impl MixerState {
    /// A mixer holding only the mic channel.
    pub fn new() -> Self {
        Self {
            channels: vec![Channel::from_preset(ChannelId::Mic)],
            monitor: MasterBus::default(),
            stream: MasterBus::default(),
        }
    }

    /// Channels in display order. The mic is always first.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|ch| ch.id == id)
    }

    fn channel_mut(&mut self, id: ChannelId) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|ch| ch.id == id)
    }

    pub fn channel_ids(&self) -> Vec<ChannelId> {
        self.channels.iter().map(|ch| ch.id).collect()
    }

    pub fn master(&self, bus: Bus) -> &MasterBus {
        match bus {
            Bus::Monitor => &self.monitor,
            Bus::Stream => &self.stream,
        }
    }

    fn master_mut(&mut self, bus: Bus) -> &mut MasterBus {
        match bus {
            Bus::Monitor => &mut self.monitor,
            Bus::Stream => &mut self.stream,
        }
    }

    /// Addable channel types not yet present, in menu order.
    pub fn available_channel_ids(&self) -> Vec<ChannelId> {
        ADDABLE_CHANNEL_IDS
            .iter()
            .copied()
            .filter(|id| self.channel(*id).is_none())
            .collect()
    }

    /// Whether the "Add Channel" affordance should be shown.
    pub fn can_add_channel(&self) -> bool {
        self.channels.len() < MAX_CHANNELS
    }

    /// Apply one action.
    ///
    /// Setters on an id that is not in the mixer are no-ops. Add, delete and
    /// reorder are guarded and leave the state untouched on error.
    pub fn apply(&mut self, action: MixerAction) -> Result<()> {
        tracing::debug!("Applying mixer action: {:?}", action);
        match action {
            MixerAction::SetVolume {
                channel,
                bus,
                value,
            } => self.set_volume(channel, bus, value),
            MixerAction::ToggleMute { channel, bus } => self.toggle_mute(channel, bus),
            MixerAction::SetInputDevice { channel, device } => {
                self.set_input_device(channel, device)
            }
            MixerAction::SetApplications {
                channel,
                applications,
            } => self.set_applications(channel, applications),
            MixerAction::AddChannel(id) => return self.add_channel(id),
            MixerAction::DeleteChannel(id) => return self.delete_channel(id),
            MixerAction::Reorder(order) => return self.reorder(&order),
            MixerAction::SetMasterVolume { bus, value } => self.set_master_volume(bus, value),
            MixerAction::ToggleMasterMute(bus) => self.toggle_master_mute(bus),
            MixerAction::SetMasterOutput { bus, device } => self.set_master_output(bus, device),
        }
        Ok(())
    }

    pub fn set_volume(&mut self, id: ChannelId, bus: Bus, value: u8) {
        if let Some(channel) = self.channel_mut(id) {
            channel.bus_mut(bus).volume = clamp_volume(value as i32);
        }
    }

    pub fn toggle_mute(&mut self, id: ChannelId, bus: Bus) {
        if let Some(channel) = self.channel_mut(id) {
            let level = channel.bus_mut(bus);
            level.muted = !level.muted;
        }
    }

    /// Select the capture device. Channels routed by application ignore it.
    pub fn set_input_device(&mut self, id: ChannelId, device: String) {
        if let Some(channel) = self.channel_mut(id) {
            match &mut channel.routing {
                Routing::InputDevice(current) => *current = Some(device),
                Routing::Applications(_) => {
                    tracing::debug!("Ignoring input device for app-routed channel {}", id);
                }
            }
        }
    }

    /// Replace the routed applications. The mic ignores it.
    pub fn set_applications(&mut self, id: ChannelId, applications: Vec<String>) {
        if let Some(channel) = self.channel_mut(id) {
            match &mut channel.routing {
                Routing::Applications(current) => *current = applications,
                Routing::InputDevice(_) => {
                    tracing::debug!("Ignoring applications for device-routed channel {}", id);
                }
            }
        }
    }

    /// Append a channel built from its preset.
    pub fn add_channel(&mut self, id: ChannelId) -> Result<()> {
        if id.is_mic() {
            return Err(MixerError::MicRequired);
        }
        if self.channel(id).is_some() {
            return Err(MixerError::DuplicateChannel(id));
        }
        if !self.can_add_channel() {
            return Err(MixerError::ChannelLimit { max: MAX_CHANNELS });
        }
        self.channels.push(Channel::from_preset(id));
        tracing::info!("Added channel {} ({} total)", id, self.channels.len());
        Ok(())
    }

    /// Remove a channel, keeping the order of the rest.
    pub fn delete_channel(&mut self, id: ChannelId) -> Result<()> {
        if id.is_mic() {
            return Err(MixerError::MicRequired);
        }
        let before = self.channels.len();
        self.channels.retain(|ch| ch.id != id);
        if self.channels.len() != before {
            tracing::info!("Deleted channel {} ({} left)", id, self.channels.len());
        }
        Ok(())
    }

    /// Replace the channel order.
    ///
    /// `order` must start with the mic and name every present channel once.
    pub fn reorder(&mut self, order: &[ChannelId]) -> Result<()> {
        if order.first() != Some(&ChannelId::Mic) {
            return Err(MixerError::InvalidOrder(
                "the mic must stay first".to_string(),
            ));
        }
        if order.len() != self.channels.len() {
            return Err(MixerError::InvalidOrder(format!(
                "expected {} channels, got {}",
                self.channels.len(),
                order.len()
            )));
        }

        let mut reordered = Vec::with_capacity(order.len());
        for (pos, id) in order.iter().enumerate() {
            if order[..pos].contains(id) {
                return Err(MixerError::InvalidOrder(format!("{} listed twice", id)));
            }
            match self.channel(*id) {
                Some(channel) => reordered.push(channel.clone()),
                None => {
                    return Err(MixerError::InvalidOrder(format!("{} is not in the mixer", id)))
                }
            }
        }

        self.channels = reordered;
        Ok(())
    }

    pub fn set_master_volume(&mut self, bus: Bus, value: u8) {
        self.master_mut(bus).volume = clamp_volume(value as i32);
    }

    pub fn toggle_master_mute(&mut self, bus: Bus) {
        let master = self.master_mut(bus);
        master.muted = !master.muted;
    }

    pub fn set_master_output(&mut self, bus: Bus, device: String) {
        self.master_mut(bus).output_device = device;
    }
}
