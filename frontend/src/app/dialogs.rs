use egui::{Color32, Context};
use mixdeck_types::{ChannelId, MixerAction};

use super::MixdeckApp;
use crate::mixer::DeleteConfirmation;

impl MixdeckApp {
    /// Ask for confirmation before deleting `channel`. The mic is never offered.
    pub(super) fn request_delete(&mut self, channel: ChannelId) {
        if channel.is_mic() {
            return;
        }
        let Some(found) = self.mixer.channel(channel) else {
            return;
        };
        self.pending_deletion = Some(DeleteConfirmation {
            channel,
            name: found.name.clone(),
        });
    }

    /// Confirm the pending delete. Returns the action to apply.
    pub(super) fn confirm_delete(&mut self) -> Option<MixerAction> {
        self.pending_deletion
            .take()
            .map(|pending| MixerAction::DeleteChannel(pending.channel))
    }

    pub(super) fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// Render the "Add Channel" modal.
    pub(super) fn render_add_channel_modal(&mut self, ctx: &Context, actions: &mut Vec<MixerAction>) {
        let existing = self.mixer.channel_ids();
        if let Some(id) = self.add_modal.show(ctx, &existing) {
            tracing::info!("Adding channel {}", id);
            actions.push(MixerAction::AddChannel(id));
        }
    }

    /// Render the delete confirmation dialog.
    pub(super) fn render_delete_confirmation(&mut self, ctx: &Context, actions: &mut Vec<MixerAction>) {
        let Some(pending) = self.pending_deletion.clone() else {
            return;
        };

        egui::Window::new("Delete Channel")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this channel?");
                ui.add_space(5.0);
                ui.colored_label(Color32::YELLOW, format!("Channel: {}", pending.name));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        if let Some(action) = self.confirm_delete() {
                            tracing::info!("Deleting channel {}", pending.channel);
                            actions.push(action);
                        }
                    }

                    if ui.button("Cancel").clicked() {
                        self.cancel_delete();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::app::MixdeckApp;
    use mixdeck_types::{ChannelId::*, MixerAction};

    fn app_with_browser() -> MixdeckApp {
        let mut app = MixdeckApp::with_config(Config::default());
        app.dispatch(MixerAction::AddChannel(Browser));
        app.dispatch(MixerAction::AddChannel(Music));
        app
    }

    #[test]
    fn test_confirm_emits_delete_and_closes() {
        let mut app = app_with_browser();
        app.request_delete(Browser);
        assert_eq!(app.pending_deletion.as_ref().unwrap().name, "Browser");

        let action = app.confirm_delete();
        assert_eq!(action, Some(MixerAction::DeleteChannel(Browser)));
        assert!(app.pending_deletion.is_none());

        app.dispatch(action.unwrap());
        assert_eq!(app.mixer().channel_ids(), vec![Mic, Music]);
    }

    #[test]
    fn test_cancel_has_no_side_effect() {
        let mut app = app_with_browser();
        app.request_delete(Music);
        app.cancel_delete();

        assert!(app.pending_deletion.is_none());
        assert_eq!(app.confirm_delete(), None);
        assert_eq!(app.mixer().channel_ids(), vec![Mic, Browser, Music]);
    }

    #[test]
    fn test_mic_is_never_offered_for_delete() {
        let mut app = app_with_browser();
        app.request_delete(Mic);
        assert!(app.pending_deletion.is_none());

        app.request_delete(Game);
        assert!(app.pending_deletion.is_none());
    }
}
