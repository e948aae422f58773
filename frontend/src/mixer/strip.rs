//! Channel strip: header, routing control and the monitor/stream bus columns.

use egui::{CursorIcon, Frame, Label, Rect, Response, RichText, Sense, Ui};
use mixdeck_types::defaults::CHANNEL_METER_COEFFICIENT;
use mixdeck_types::{Bus, Catalog, Channel, ChannelId, MixerAction, Routing};

use super::{
    app_picker, bus_column, device_combo, DRAGGED_OPACITY, STRIP_INNER, STRIP_MARGIN,
};
use crate::{icons, themes};

/// A delete awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub channel: ChannelId,
    pub name: String,
}

/// Frame-level outcome of rendering a strip that the app acts on.
#[derive(Debug)]
pub struct StripResponse {
    /// Screen rect of the whole strip, used for drop targeting
    pub rect: Rect,
    /// Drag handle, absent on the mic strip
    pub handle: Option<Response>,
    /// "Delete Channel" was chosen from the context menu
    pub delete_requested: bool,
}

/// Render one channel strip, pushing any edits into `actions`.
pub fn channel_strip(
    ui: &mut Ui,
    channel: &Channel,
    catalog: &Catalog,
    dragged: bool,
    actions: &mut Vec<MixerAction>,
) -> StripResponse {
    let mut handle = None;
    let mut delete_requested = false;

    let frame = ui.scope(|ui| {
        if dragged {
            ui.multiply_opacity(DRAGGED_OPACITY);
        }

        Frame::group(ui.style())
            .fill(ui.visuals().faint_bg_color)
            .inner_margin(STRIP_MARGIN)
            .show(ui, |ui| {
                ui.set_width(STRIP_INNER);
                ui.spacing_mut().item_spacing.y = 6.0;

                // ── Header ──
                ui.horizontal(|ui| {
                    if !channel.id.is_mic() {
                        let grip = ui
                            .add(
                                Label::new(RichText::new(icons::DRAG_HANDLE).weak())
                                    .sense(Sense::drag()),
                            )
                            .on_hover_cursor(CursorIcon::Grab);
                        handle = Some(grip);
                    }

                    let icon_color = if channel.is_fully_muted() {
                        ui.visuals().weak_text_color()
                    } else {
                        themes::accent(ui.visuals())
                    };
                    ui.label(
                        RichText::new(icons::channel_icon(channel.icon))
                            .size(16.0)
                            .color(icon_color),
                    );

                    let name = ui.add(
                        Label::new(RichText::new(&channel.name).strong()).sense(Sense::click()),
                    );
                    if !channel.id.is_mic() {
                        name.context_menu(|ui| {
                            if ui
                                .button(format!("{}  Delete Channel", icons::DELETE))
                                .clicked()
                            {
                                delete_requested = true;
                                ui.close();
                            }
                        });
                    }
                });

                // ── Routing ──
                match &channel.routing {
                    Routing::InputDevice(device) => {
                        if let Some(device) = device_combo(
                            ui,
                            (channel.id, "input"),
                            device.as_deref(),
                            "Select input",
                            &catalog.input_devices,
                            STRIP_INNER - 8.0,
                        ) {
                            actions.push(MixerAction::SetInputDevice {
                                channel: channel.id,
                                device,
                            });
                        }
                    }
                    Routing::Applications(selected) => {
                        if let Some(applications) = app_picker(
                            ui,
                            (channel.id, "apps"),
                            selected,
                            &catalog.applications,
                            STRIP_INNER - 8.0,
                        ) {
                            actions.push(MixerAction::SetApplications {
                                channel: channel.id,
                                applications,
                            });
                        }
                    }
                }

                // ── Buses ──
                ui.horizontal(|ui| {
                    for bus in Bus::ALL {
                        let column = ui
                            .vertical(|ui| {
                                bus_column(
                                    ui,
                                    (channel.id, bus),
                                    bus.short_label(),
                                    channel.bus(bus),
                                    CHANNEL_METER_COEFFICIENT,
                                )
                            })
                            .inner;
                        if let Some(value) = column.volume {
                            actions.push(MixerAction::SetVolume {
                                channel: channel.id,
                                bus,
                                value,
                            });
                        }
                        if column.mute_toggled {
                            actions.push(MixerAction::ToggleMute {
                                channel: channel.id,
                                bus,
                            });
                        }
                    }
                });
            })
            .response
    });

    StripResponse {
        rect: frame.inner.rect,
        handle,
        delete_requested,
    }
}
