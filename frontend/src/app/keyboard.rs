use egui::{Context, Key};

use super::MixdeckApp;

impl MixdeckApp {
    /// Handle global keyboard shortcuts.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &Context) {
        // ESC key - highest priority, works even in text inputs
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            if self.reorder.dragging().is_some() {
                self.reorder.cancel();
                self.status = "Ready".to_string();
            } else if self.pending_deletion.is_some() {
                self.cancel_delete();
            } else if self.add_modal.is_open() {
                self.add_modal.close();
            }
        }

        if ctx.wants_keyboard_input() {
            return;
        }

        // Ctrl+N - Add channel
        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::N)) {
            self.open_add_modal();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::MixdeckApp;
    use crate::config::Config;
    use egui::{Event, Key, Modifiers, RawInput};
    use mixdeck_types::ChannelId;

    fn press(app: &mut MixdeckApp, key: Key, modifiers: Modifiers) {
        let ctx = egui::Context::default();
        let input = RawInput {
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            modifiers,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_keyboard_shortcuts(ctx));
    }

    #[test]
    fn test_command_n_opens_add_modal() {
        let mut app = MixdeckApp::with_config(Config::default());
        press(&mut app, Key::N, Modifiers::COMMAND);
        assert!(app.add_modal.is_open());

        press(&mut app, Key::Escape, Modifiers::NONE);
        assert!(!app.add_modal.is_open());
    }

    #[test]
    fn test_escape_cancels_drag_first() {
        let mut app = MixdeckApp::with_config(Config::default());
        app.dispatch(mixdeck_types::MixerAction::AddChannel(ChannelId::Game));
        let order = app.mixer().channel_ids();
        assert!(app.reorder.begin(ChannelId::Game, &order));
        app.add_modal.open();

        press(&mut app, Key::Escape, Modifiers::NONE);
        assert!(app.reorder.dragging().is_none());
        assert!(app.add_modal.is_open());
    }
}
