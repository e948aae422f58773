//! "Add Channel" modal.

use egui::{Button, Context, RichText, Vec2};
use mixdeck_types::{ChannelId, ADDABLE_CHANNEL_IDS};

use crate::icons;

/// One row of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddChannelEntry {
    pub id: ChannelId,
    pub name: &'static str,
    /// Present in the mixer already: shown disabled and inert
    pub already_added: bool,
}

/// One entry per addable channel type, in menu order.
pub fn entries(existing: &[ChannelId]) -> Vec<AddChannelEntry> {
    ADDABLE_CHANNEL_IDS
        .iter()
        .map(|&id| AddChannelEntry {
            id,
            name: id.preset().name,
            already_added: existing.contains(&id),
        })
        .collect()
}

/// Modal listing the channel types that can be added.
#[derive(Debug, Default)]
pub struct AddChannelModal {
    open: bool,
}

impl AddChannelModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Activate an entry. Returns the id to add and closes the modal, or
    /// does nothing when the entry is already present.
    pub fn activate(&mut self, entry: &AddChannelEntry) -> Option<ChannelId> {
        if entry.already_added || !self.open {
            return None;
        }
        self.open = false;
        Some(entry.id)
    }

    /// Render the modal if open. Returns the id the user picked this frame.
    pub fn show(&mut self, ctx: &Context, existing: &[ChannelId]) -> Option<ChannelId> {
        if !self.open {
            return None;
        }

        let mut picked = None;
        let mut keep_open = true;

        egui::Window::new("Add Channel")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut keep_open)
            .show(ctx, |ui| {
                ui.label("Choose an audio source to add to your mixer.");
                ui.add_space(10.0);

                egui::Grid::new("add_channel_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        for (i, entry) in entries(existing).iter().enumerate() {
                            let text = format!("{}  {}", icons::channel_icon(entry.id), entry.name);
                            let mut label = RichText::new(text);
                            if entry.already_added {
                                label = label.weak();
                            }
                            let button = ui
                                .vertical(|ui| {
                                    let response = ui.add_enabled(
                                        !entry.already_added,
                                        Button::new(label).min_size(Vec2::new(140.0, 36.0)),
                                    );
                                    if entry.already_added {
                                        ui.label(RichText::new("Already added").small().weak());
                                    }
                                    response
                                })
                                .inner;
                            if button.clicked() {
                                picked = Some(*entry);
                            }
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            });

        if !keep_open {
            self.close();
        }

        picked.and_then(|entry| self.activate(&entry))
    }
}
