use egui::{
    Button, CentralPanel, Color32, Context, Rect, RichText, ScrollArea, SidePanel, Stroke,
    TopBottomPanel, Vec2,
};
use mixdeck_types::{Bus, ChannelId, MixerAction};

use super::MixdeckApp;
use crate::mixer::{self, StripResponse, STRIP_GAP};
use crate::themes::{self, ThemePreference};
use crate::icons;

/// Final index for `dragged` if released at `pointer_x`: the number of other
/// strips whose centre lies left of the pointer.
pub(super) fn drop_target(strips: &[(ChannelId, Rect)], dragged: ChannelId, pointer_x: f32) -> usize {
    strips
        .iter()
        .filter(|(id, rect)| *id != dragged && rect.center().x < pointer_x)
        .count()
}

/// Horizontal position of the drop marker for `target`.
pub(super) fn drop_marker_x(
    strips: &[(ChannelId, Rect)],
    dragged: ChannelId,
    target: usize,
) -> Option<f32> {
    let others: Vec<&Rect> = strips
        .iter()
        .filter(|(id, _)| *id != dragged)
        .map(|(_, rect)| rect)
        .collect();
    match others.get(target) {
        Some(rect) => Some(rect.left() - STRIP_GAP / 2.0),
        None => others.last().map(|rect| rect.right() + STRIP_GAP / 2.0),
    }
}

impl MixdeckApp {
    /// Render the top bar with the title and theme selector.
    pub(super) fn render_top_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Mixdeck");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut selected = self.theme;
                    egui::ComboBox::from_id_salt("theme_selector")
                        .selected_text(selected.label())
                        .show_ui(ui, |ui| {
                            for theme in ThemePreference::ALL {
                                ui.selectable_value(&mut selected, theme, theme.label());
                            }
                        });
                    ui.label("Theme:");

                    if selected != self.theme {
                        self.theme = selected;
                        self.apply_theme(ui.ctx());
                    }
                });
            });
        });
    }

    /// Render the status bar.
    pub(super) fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.separator();
                ui.label(format!("Channels: {}", self.mixer.channels().len()));

                if let Some(channel) = self.reorder.dragging() {
                    ui.separator();
                    ui.label(format!("Moving {} (Esc to cancel)", channel));
                }

                if let Some(ref error) = self.last_error {
                    ui.separator();
                    ui.colored_label(Color32::from_rgb(255, 80, 80), error);
                }
            });
        });
    }

    /// Render the master pane with one output strip per bus.
    pub(super) fn render_master_panel(&mut self, ctx: &Context, actions: &mut Vec<MixerAction>) {
        SidePanel::right("master_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("OUTPUT").small().strong());
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = STRIP_GAP;
                    for bus in Bus::ALL {
                        mixer::master_output(ui, bus, self.mixer.master(bus), &self.catalog, actions);
                    }
                });
            });
    }

    /// Render the channel row, the add tile and the reorder feedback.
    pub(super) fn render_channel_row(&mut self, ctx: &Context, actions: &mut Vec<MixerAction>) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CHANNELS").small().strong());
            ui.add_space(4.0);

            let dragging = self.reorder.dragging();
            let mut strips: Vec<(ChannelId, StripResponse)> = Vec::new();
            let mut add_clicked = false;

            let row = ScrollArea::horizontal()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        ui.spacing_mut().item_spacing.x = STRIP_GAP;

                        for channel in self.mixer.channels() {
                            let response = mixer::channel_strip(
                                ui,
                                channel,
                                &self.catalog,
                                dragging == Some(channel.id),
                                actions,
                            );
                            strips.push((channel.id, response));
                        }

                        if self.mixer.can_add_channel() {
                            let tile = ui.add(
                                Button::new(
                                    RichText::new(format!("{}\nAdd Channel", icons::ADD))
                                        .size(14.0),
                                )
                                .min_size(Vec2::new(mixer::STRIP_INNER, 120.0)),
                            );
                            if tile.clicked() {
                                add_clicked = true;
                            }
                        }
                    })
                    .response
                    .rect
                })
                .inner;

            self.strip_rects = strips.iter().map(|(id, s)| (*id, s.rect)).collect();
            let order = self.mixer.channel_ids();
            let pointer = ui.ctx().pointer_latest_pos();

            for (id, strip) in &strips {
                if strip.delete_requested {
                    self.request_delete(*id);
                }
                let Some(handle) = &strip.handle else {
                    continue;
                };
                if handle.drag_started() && self.reorder.begin(*id, &order) {
                    self.status = format!("Dragging {}", id);
                }
                if handle.drag_stopped() {
                    let inside = pointer.is_some_and(|p| row.expand(STRIP_GAP).contains(p));
                    if !inside {
                        self.reorder.cancel();
                    } else if let Some(new_order) = self.reorder.commit(&order) {
                        actions.push(MixerAction::Reorder(new_order));
                    }
                    self.status = "Ready".to_string();
                }
            }

            if let (Some(dragged), Some(pointer)) = (self.reorder.dragging(), pointer) {
                let target = drop_target(&self.strip_rects, dragged, pointer.x);
                self.reorder.hover(target, order.len());
                let marker = self
                    .reorder
                    .target()
                    .and_then(|t| drop_marker_x(&self.strip_rects, dragged, t));
                if let Some(x) = marker {
                    ui.painter().vline(
                        x,
                        row.y_range(),
                        Stroke::new(2.0, themes::accent(ui.visuals())),
                    );
                }
            }

            if add_clicked {
                self.open_add_modal();
            }
        });
    }

    /// Open the add modal if another channel type can still be added.
    pub(super) fn open_add_modal(&mut self) {
        if self.mixer.can_add_channel() {
            self.add_modal.open();
        } else {
            tracing::debug!("Add modal not opened: every channel type is present");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use ChannelId::*;

    fn strip_at(id: ChannelId, left: f32) -> (ChannelId, Rect) {
        (id, Rect::from_min_size(pos2(left, 0.0), Vec2::new(100.0, 300.0)))
    }

    fn row() -> Vec<(ChannelId, Rect)> {
        vec![
            strip_at(Mic, 0.0),
            strip_at(System, 110.0),
            strip_at(Browser, 220.0),
            strip_at(Game, 330.0),
        ]
    }

    #[test]
    fn test_drop_target_counts_strips_left_of_pointer() {
        let strips = row();
        // Game dragged over the gap between Mic and System
        assert_eq!(drop_target(&strips, Game, 105.0), 1);
        // System dragged past Browser's centre
        assert_eq!(drop_target(&strips, System, 280.0), 2);
        // Far right is the end of the list
        assert_eq!(drop_target(&strips, System, 900.0), 3);
        // Left of the mic centre yields 0, which the reorder session clamps to 1
        assert_eq!(drop_target(&strips, Browser, 10.0), 0);
    }

    #[test]
    fn test_drop_marker_position() {
        let strips = row();
        assert_eq!(drop_marker_x(&strips, Game, 1), Some(110.0 - STRIP_GAP / 2.0));
        assert_eq!(drop_marker_x(&strips, System, 3), Some(430.0 + STRIP_GAP / 2.0));
        assert_eq!(drop_marker_x(&[], System, 1), None);
    }
}
