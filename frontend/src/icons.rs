//! Glyphs from the Phosphor icon font.

use egui_phosphor::regular as ph;
use mixdeck_types::{Bus, ChannelId};

/// Register the Phosphor font so icon glyphs render inside any text.
pub fn install(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

pub fn channel_icon(id: ChannelId) -> &'static str {
    match id {
        ChannelId::Mic => ph::MICROPHONE,
        ChannelId::System => ph::MONITOR,
        ChannelId::Browser => ph::GLOBE,
        ChannelId::Vc => ph::HEADPHONES,
        ChannelId::Game => ph::GAME_CONTROLLER,
        ChannelId::Music => ph::MUSIC_NOTES,
    }
}

pub fn master_icon(bus: Bus) -> &'static str {
    match bus {
        Bus::Monitor => ph::SPEAKER_HIFI,
        Bus::Stream => ph::RADIO,
    }
}

pub fn mute_icon(muted: bool) -> &'static str {
    if muted {
        ph::SPEAKER_SLASH
    } else {
        ph::SPEAKER_HIGH
    }
}

pub const ADD: &str = ph::PLUS;
pub const DRAG_HANDLE: &str = ph::DOTS_SIX_VERTICAL;
pub const DELETE: &str = ph::TRASH;
