//! Default values and static tables for the mixer.
//!
//! Single source of truth shared by the state container and the frontend.

// ── Volume ──────────────────────────────────────────────────────────
pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 100;
/// Volume of both buses on a freshly added channel
pub const DEFAULT_CHANNEL_VOLUME: u8 = 75;
/// Volume of a master bus at start-up
pub const DEFAULT_MASTER_VOLUME: u8 = 80;

// ── Synthetic metering ──────────────────────────────────────────────
/// Meter level = volume * coefficient on channel buses
pub const CHANNEL_METER_COEFFICIENT: f32 = 0.85;
/// Meter level = volume * coefficient on master buses
pub const MASTER_METER_COEFFICIENT: f32 = 0.9;

// ── Structural limits ───────────────────────────────────────────────
/// Mic plus one of each addable type
pub const MAX_CHANNELS: usize = 6;

// ── Device and application placeholders ─────────────────────────────
pub const DEFAULT_INPUT_DEVICE: &str = "Default Input";
pub const DEFAULT_OUTPUT_DEVICE: &str = "Default Output";

pub const INPUT_DEVICES: &[&str] = &["Default Input", "USB Microphone", "Line In", "Webcam Mic"];

pub const OUTPUT_DEVICES: &[&str] = &["Default Output", "Headphones", "Speakers", "HDMI Audio"];

pub const APPLICATIONS: &[&str] = &[
    "Chrome",
    "Spotify",
    "Discord",
    "Game.exe",
    "OBS Studio",
    "Firefox",
];

/// Clamp an arbitrary slider value into the volume range.
pub fn clamp_volume(value: i32) -> u8 {
    value.clamp(MIN_VOLUME as i32, MAX_VOLUME as i32) as u8
}

/// Synthetic meter level for one bus.
///
/// A muted bus always reads 0, whatever its stored volume.
pub fn meter_level(volume: u8, muted: bool, coefficient: f32) -> f32 {
    if muted {
        0.0
    } else {
        volume as f32 * coefficient
    }
}

/// Text shown under a bus fader.
pub fn volume_readout(volume: u8, muted: bool) -> String {
    if muted {
        "--".to_string()
    } else {
        volume.to_string()
    }
}
