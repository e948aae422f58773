//! Master output strip for one bus.

use egui::{Frame, RichText, Ui};
use mixdeck_types::defaults::MASTER_METER_COEFFICIENT;
use mixdeck_types::{Bus, BusLevel, Catalog, MasterBus, MixerAction};

use super::{bus_column, device_combo, MASTER_INNER, STRIP_MARGIN};
use crate::{icons, themes};

/// Render the master strip for `bus`: header, output device and bus column.
pub fn master_output(
    ui: &mut Ui,
    bus: Bus,
    master: &MasterBus,
    catalog: &Catalog,
    actions: &mut Vec<MixerAction>,
) {
    Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(STRIP_MARGIN)
        .show(ui, |ui| {
            ui.set_width(MASTER_INNER);
            ui.spacing_mut().item_spacing.y = 6.0;

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(icons::master_icon(bus))
                        .size(16.0)
                        .color(themes::accent(ui.visuals())),
                );
                ui.label(RichText::new(bus.label()).strong());
            });

            if let Some(device) = device_combo(
                ui,
                (bus, "output"),
                Some(master.output_device.as_str()),
                "Select output",
                &catalog.output_devices,
                MASTER_INNER - 8.0,
            ) {
                actions.push(MixerAction::SetMasterOutput { bus, device });
            }

            let level = BusLevel {
                volume: master.volume,
                muted: master.muted,
            };
            ui.vertical_centered(|ui| {
                let column = bus_column(
                    ui,
                    (bus, "master"),
                    "MASTER",
                    &level,
                    MASTER_METER_COEFFICIENT,
                );
                if let Some(value) = column.volume {
                    actions.push(MixerAction::SetMasterVolume { bus, value });
                }
                if column.mute_toggled {
                    actions.push(MixerAction::ToggleMasterMute(bus));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_master_emits_nothing() {
        let ctx = egui::Context::default();
        let catalog = Catalog::default();
        let master = MasterBus::default();
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for bus in Bus::ALL {
                    master_output(ui, bus, &master, &catalog, &mut actions);
                }
            });
        });
        assert!(actions.is_empty());
    }
}
