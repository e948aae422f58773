use egui::Context;

use super::MixdeckApp;

impl eframe::App for MixdeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl MixdeckApp {
    /// Lay out one frame and apply every action it produced.
    pub fn show(&mut self, ctx: &Context) {
        // Apply theme in first update frame (settings during construction may not persist)
        if self.needs_initial_settings_apply {
            self.needs_initial_settings_apply = false;
            self.apply_theme(ctx);
        }

        self.handle_keyboard_shortcuts(ctx);

        let mut actions = Vec::new();

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_master_panel(ctx, &mut actions);
        self.render_channel_row(ctx, &mut actions);

        self.render_add_channel_modal(ctx, &mut actions);
        self.render_delete_confirmation(ctx, &mut actions);

        self.dispatch_all(actions);
    }
}
