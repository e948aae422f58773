use egui::Context;
use mixdeck_types::{MixerState, ReorderState};

use super::MixdeckApp;
use crate::config::Config;
use crate::icons;
use crate::mixer::AddChannelModal;

impl MixdeckApp {
    /// Create the application for an eframe window or canvas.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        icons::install(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// Create the application without a rendering context.
    pub fn with_config(config: Config) -> Self {
        tracing::info!(
            "Starting mixer with {} input devices, {} output devices, {} applications",
            config.catalog.input_devices.len(),
            config.catalog.output_devices.len(),
            config.catalog.applications.len()
        );

        Self {
            mixer: MixerState::new(),
            catalog: config.catalog,
            theme: config.ui.theme,
            add_modal: AddChannelModal::default(),
            pending_deletion: None,
            reorder: ReorderState::default(),
            strip_rects: Vec::new(),
            status: "Ready".to_string(),
            last_error: None,
            needs_initial_settings_apply: true,
        }
    }

    /// Apply the current theme preference.
    pub(super) fn apply_theme(&self, ctx: &Context) {
        tracing::debug!("Applying theme: {:?}", self.theme);
        ctx.set_visuals(self.theme.visuals());
    }
}
