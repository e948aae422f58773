use egui::{Button, Color32, ComboBox, RichText, Ui, Vec2};
use mixdeck_types::defaults::{meter_level, volume_readout, MAX_VOLUME, MIN_VOLUME};
use mixdeck_types::BusLevel;
use std::hash::Hash;

use super::{BTN_H, COLUMN_WIDTH, FADER_HEIGHT};
use crate::{icons, meter};

/// What the user did to a bus column this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BusColumnResponse {
    /// New fader position, if it moved
    pub volume: Option<u8>,
    pub mute_toggled: bool,
}

/// Render one bus: label, meter, vertical fader, readout and mute button.
///
/// The meter is fed `muted ? 0 : volume * coefficient`.
pub fn bus_column(
    ui: &mut Ui,
    id_salt: impl Hash,
    label: &str,
    level: &BusLevel,
    coefficient: f32,
) -> BusColumnResponse {
    let mut response = BusColumnResponse::default();

    ui.push_id(id_salt, |ui| {
        ui.set_width(COLUMN_WIDTH);
        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = 4.0;

            ui.label(RichText::new(label).small().strong());

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                meter::show(
                    ui,
                    meter_level(level.volume, level.muted, coefficient),
                    FADER_HEIGHT,
                );

                let mut volume = level.volume;
                ui.spacing_mut().slider_width = FADER_HEIGHT;
                let fader = ui.add(
                    egui::Slider::new(&mut volume, MIN_VOLUME..=MAX_VOLUME)
                        .vertical()
                        .show_value(false),
                );
                if fader.changed() && volume != level.volume {
                    response.volume = Some(volume);
                }
            });

            ui.label(RichText::new(volume_readout(level.volume, level.muted)).monospace());

            let (fill, text) = if level.muted {
                (Color32::from_rgb(200, 50, 50), Color32::WHITE)
            } else {
                (ui.visuals().widgets.inactive.weak_bg_fill, ui.visuals().text_color())
            };
            let mute = ui
                .add(
                    Button::new(RichText::new(icons::mute_icon(level.muted)).color(text))
                        .fill(fill)
                        .min_size(Vec2::new(COLUMN_WIDTH - 8.0, BTN_H)),
                )
                .on_hover_text(if level.muted { "Unmute" } else { "Mute" });
            if mute.clicked() {
                response.mute_toggled = true;
            }
        });
    });

    response
}

/// Single-select combo box. Returns the entry picked this frame, if it differs
/// from `selected`.
pub fn device_combo(
    ui: &mut Ui,
    id_salt: impl Hash,
    selected: Option<&str>,
    placeholder: &str,
    options: &[String],
    width: f32,
) -> Option<String> {
    let mut picked = None;

    ComboBox::from_id_salt(id_salt)
        .width(width)
        .selected_text(selected.unwrap_or(placeholder))
        .show_ui(ui, |ui| {
            for option in options {
                let is_selected = selected == Some(option.as_str());
                if ui.selectable_label(is_selected, option).clicked() && !is_selected {
                    picked = Some(option.clone());
                }
            }
        });

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_in_panel<R>(mut f: impl FnMut(&mut Ui) -> R) -> R {
        let ctx = egui::Context::default();
        let mut result = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = Some(f(ui));
            });
        });
        result.expect("panel closure runs once per frame")
    }

    #[test]
    fn test_bus_column_idle_frame_reports_nothing() {
        let level = BusLevel::new(75);
        let response = run_in_panel(|ui| bus_column(ui, "monitor", "MON", &level, 0.85));
        assert_eq!(response, BusColumnResponse::default());
    }

    #[test]
    fn test_device_combo_closed_picks_nothing() {
        let options = vec!["Default Input".to_string(), "USB Microphone".to_string()];
        let picked = run_in_panel(|ui| {
            device_combo(ui, "input", None, "Select input", &options, 100.0)
        });
        assert!(picked.is_none());
    }
}
