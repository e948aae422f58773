//! Colour themes for the mixer.
//!
//! `Studio` is a dark console-style palette. `Dark` and `Light` are the
//! stock egui themes.

use egui::{Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Studio colour palette
mod studio {
    use egui::Color32;

    // Backgrounds
    pub const BG_DEEP: Color32 = Color32::from_rgb(0x14, 0x15, 0x19);
    pub const BG_PANEL: Color32 = Color32::from_rgb(0x1b, 0x1d, 0x22);
    pub const BG_CARD: Color32 = Color32::from_rgb(0x24, 0x26, 0x2d);
    pub const BG_RAISED: Color32 = Color32::from_rgb(0x2e, 0x31, 0x3a);
    pub const BORDER: Color32 = Color32::from_rgb(0x3a, 0x3d, 0x47);

    // Foreground/text
    pub const FG: Color32 = Color32::from_rgb(0xd4, 0xd7, 0xde);
    pub const FG_BRIGHT: Color32 = Color32::from_rgb(0xf2, 0xf3, 0xf5);

    // Accent colors
    pub const ACCENT: Color32 = Color32::from_rgb(0x5b, 0x9c, 0xf5);
    pub const ACCENT_DIM: Color32 = Color32::from_rgb(0x2c, 0x45, 0x6b);
    pub const RED: Color32 = Color32::from_rgb(0xef, 0x5b, 0x5b);
    pub const ORANGE: Color32 = Color32::from_rgb(0xf5, 0xa5, 0x42);
}

/// Theme preference for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreference {
    /// Console-style dark palette
    #[default]
    Studio,
    /// Standard egui dark theme
    Dark,
    /// Standard egui light theme
    Light,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Studio, Self::Dark, Self::Light];

    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            Self::Studio => studio_dark(),
            Self::Dark => Visuals::dark(),
            Self::Light => Visuals::light(),
        }
    }
}

/// Create Studio theme visuals
pub fn studio_dark() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = studio::BG_PANEL;
    visuals.panel_fill = studio::BG_DEEP;
    visuals.faint_bg_color = studio::BG_CARD;
    visuals.extreme_bg_color = studio::BG_DEEP;
    visuals.override_text_color = Some(studio::FG);

    visuals.selection.bg_fill = studio::ACCENT_DIM;
    visuals.selection.stroke = Stroke::new(1.0, studio::ACCENT);
    visuals.hyperlink_color = studio::ACCENT;
    visuals.warn_fg_color = studio::ORANGE;
    visuals.error_fg_color = studio::RED;

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = studio::BG_CARD;
    widgets.noninteractive.weak_bg_fill = studio::BG_CARD;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, studio::BORDER);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, studio::FG);

    widgets.inactive.bg_fill = studio::BG_RAISED;
    widgets.inactive.weak_bg_fill = studio::BG_RAISED;
    widgets.inactive.bg_stroke = Stroke::NONE;
    widgets.inactive.fg_stroke = Stroke::new(1.0, studio::FG);

    widgets.hovered.bg_fill = studio::BORDER;
    widgets.hovered.weak_bg_fill = studio::BORDER;
    widgets.hovered.bg_stroke = Stroke::new(1.0, studio::ACCENT);
    widgets.hovered.fg_stroke = Stroke::new(1.0, studio::FG_BRIGHT);

    widgets.active.bg_fill = studio::ACCENT;
    widgets.active.weak_bg_fill = studio::ACCENT;
    widgets.active.bg_stroke = Stroke::new(1.0, studio::ACCENT);
    widgets.active.fg_stroke = Stroke::new(2.0, studio::FG_BRIGHT);

    widgets.open.bg_fill = studio::BG_RAISED;
    widgets.open.weak_bg_fill = studio::BG_RAISED;
    widgets.open.bg_stroke = Stroke::new(1.0, studio::ACCENT);
    widgets.open.fg_stroke = Stroke::new(1.0, studio::FG);

    visuals.window_stroke = Stroke::new(1.0, studio::BORDER);

    visuals
}

/// Accent used for active channel icons and drop markers.
pub fn accent(visuals: &Visuals) -> Color32 {
    visuals.selection.stroke.color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_is_dark() {
        assert!(ThemePreference::Studio.visuals().dark_mode);
        assert!(ThemePreference::Dark.visuals().dark_mode);
        assert!(!ThemePreference::Light.visuals().dark_mode);
    }

    #[test]
    fn test_studio_accent() {
        assert_eq!(accent(&studio_dark()), studio::ACCENT);
    }
}
