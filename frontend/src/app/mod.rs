//! Main application structure.

mod constructors;
mod dialogs;
mod keyboard;
mod rendering;
mod update;

use egui::Rect;
use mixdeck_types::{Catalog, ChannelId, MixerAction, MixerState, ReorderState};

use crate::mixer::{AddChannelModal, DeleteConfirmation};
use crate::themes::ThemePreference;

/// The Mixdeck application: owns the mixer and every piece of UI state.
pub struct MixdeckApp {
    /// Channels and master buses
    mixer: MixerState,
    /// Choices offered by the pickers
    catalog: Catalog,
    theme: ThemePreference,
    add_modal: AddChannelModal,
    /// Channel whose delete awaits confirmation
    pending_deletion: Option<DeleteConfirmation>,
    reorder: ReorderState,
    /// Strip rects from the last rendered frame, in channel order
    strip_rects: Vec<(ChannelId, Rect)>,
    /// Status bar text
    status: String,
    /// Last rejected action, cleared by the next accepted one
    last_error: Option<String>,
    /// Theme must be applied in the first update frame
    needs_initial_settings_apply: bool,
}

impl MixdeckApp {
    pub fn mixer(&self) -> &MixerState {
        &self.mixer
    }

    /// Apply one action to the mixer. Rejections are logged and shown in the
    /// status bar; state is left untouched.
    fn dispatch(&mut self, action: MixerAction) {
        match self.mixer.apply(action) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                tracing::warn!("Rejected mixer action: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Apply actions collected during a frame, in order.
    fn dispatch_all(&mut self, actions: Vec<MixerAction>) {
        for action in actions {
            self.dispatch(action);
        }
    }
}
