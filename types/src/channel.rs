//! Channel, bus and master bus definitions.

use crate::defaults::{
    clamp_volume, DEFAULT_CHANNEL_VOLUME, DEFAULT_INPUT_DEVICE, DEFAULT_MASTER_VOLUME,
    DEFAULT_OUTPUT_DEVICE,
};
use serde::{Deserialize, Serialize};

/// Identity of a channel. Each id appears at most once in a mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelId {
    Mic,
    System,
    Browser,
    Vc,
    Game,
    Music,
}

/// Channel types that can be added after start-up, in menu order.
pub const ADDABLE_CHANNEL_IDS: [ChannelId; 5] = [
    ChannelId::System,
    ChannelId::Browser,
    ChannelId::Vc,
    ChannelId::Game,
    ChannelId::Music,
];

/// Static name and icon used to materialize a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPreset {
    pub name: &'static str,
    pub icon: ChannelId,
}

impl ChannelId {
    /// Preset for this channel type.
    pub fn preset(self) -> ChannelPreset {
        let name = match self {
            Self::Mic => "Mic",
            Self::System => "System",
            Self::Browser => "Browser",
            Self::Vc => "VC",
            Self::Game => "Game",
            Self::Music => "Music",
        };
        ChannelPreset { name, icon: self }
    }

    pub fn is_mic(self) -> bool {
        self == Self::Mic
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.preset().name)
    }
}

/// Independent audio destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bus {
    /// Local listening
    Monitor,
    /// Broadcast feed
    Stream,
}

impl Bus {
    pub const ALL: [Bus; 2] = [Bus::Monitor, Bus::Stream];

    /// Short label shown above a channel bus column.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Monitor => "MON",
            Self::Stream => "STR",
        }
    }

    /// Label shown on the master output pane.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monitor => "Monitor",
            Self::Stream => "Stream",
        }
    }
}

/// What feeds a channel.
///
/// The mic picks a capture device; every other channel gathers applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routing {
    InputDevice(Option<String>),
    Applications(Vec<String>),
}

/// Volume and mute state of one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusLevel {
    pub volume: u8,
    pub muted: bool,
}

impl BusLevel {
    pub fn new(volume: u8) -> Self {
        Self {
            volume: clamp_volume(volume as i32),
            muted: false,
        }
    }
}

/// One addressable audio source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub icon: ChannelId,
    pub monitor: BusLevel,
    pub stream: BusLevel,
    pub routing: Routing,
}

impl Channel {
    /// Create a channel from the preset for `id`.
    pub fn from_preset(id: ChannelId) -> Self {
        let preset = id.preset();
        let routing = if id.is_mic() {
            Routing::InputDevice(Some(DEFAULT_INPUT_DEVICE.to_string()))
        } else {
            Routing::Applications(Vec::new())
        };

        Self {
            id,
            name: preset.name.to_string(),
            icon: preset.icon,
            monitor: BusLevel::new(DEFAULT_CHANNEL_VOLUME),
            stream: BusLevel::new(DEFAULT_CHANNEL_VOLUME),
            routing,
        }
    }

    pub fn bus(&self, bus: Bus) -> &BusLevel {
        match bus {
            Bus::Monitor => &self.monitor,
            Bus::Stream => &self.stream,
        }
    }

    pub fn bus_mut(&mut self, bus: Bus) -> &mut BusLevel {
        match bus {
            Bus::Monitor => &mut self.monitor,
            Bus::Stream => &mut self.stream,
        }
    }

    /// True when both buses are muted.
    pub fn is_fully_muted(&self) -> bool {
        self.monitor.muted && self.stream.muted
    }

    /// Selected capture device (mic only).
    pub fn input_device(&self) -> Option<&str> {
        match &self.routing {
            Routing::InputDevice(device) => device.as_deref(),
            Routing::Applications(_) => None,
        }
    }

    /// Routed applications (empty for the mic).
    pub fn applications(&self) -> &[String] {
        match &self.routing {
            Routing::Applications(apps) => apps,
            Routing::InputDevice(_) => &[],
        }
    }
}

/// Final mixed destination for one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterBus {
    pub volume: u8,
    pub muted: bool,
    pub output_device: String,
}

impl Default for MasterBus {
    fn default() -> Self {
        Self {
            volume: DEFAULT_MASTER_VOLUME,
            muted: false,
            output_device: DEFAULT_OUTPUT_DEVICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_channel_defaults() {
        let system = Channel::from_preset(ChannelId::System);
        assert_eq!(system.name, "System");
        assert_eq!(system.icon, ChannelId::System);
        assert_eq!(system.monitor, BusLevel::new(75));
        assert_eq!(system.stream, BusLevel::new(75));
        assert_eq!(system.routing, Routing::Applications(Vec::new()));
        assert_eq!(system.input_device(), None);
    }

    #[test]
    fn test_mic_routes_default_input() {
        let mic = Channel::from_preset(ChannelId::Mic);
        assert_eq!(mic.input_device(), Some("Default Input"));
        assert!(mic.applications().is_empty());
    }

    #[test]
    fn test_fully_muted_requires_both_buses() {
        let mut ch = Channel::from_preset(ChannelId::Game);
        ch.monitor.muted = true;
        assert!(!ch.is_fully_muted());
        ch.stream.muted = true;
        assert!(ch.is_fully_muted());
    }

    #[test]
    fn test_channel_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChannelId::Vc).unwrap(), "\"vc\"");
        let parsed: ChannelId = serde_json::from_str("\"music\"").unwrap();
        assert_eq!(parsed, ChannelId::Music);
    }

    #[test]
    fn test_addable_ids_exclude_mic() {
        assert!(!ADDABLE_CHANNEL_IDS.contains(&ChannelId::Mic));
        assert_eq!(ADDABLE_CHANNEL_IDS.len() + 1, crate::defaults::MAX_CHANNELS);
    }
}
