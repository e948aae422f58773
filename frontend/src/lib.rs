//! Mixdeck frontend library.
//!
//! The egui application and its components. Runs natively through
//! [`run_native`] and in the browser through the wasm entry point.

#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod config;
pub mod icons;
pub mod meter;
pub mod mixer;
pub mod themes;

pub use app::MixdeckApp;
pub use config::Config;
pub use themes::ThemePreference;

/// Open the mixer in a native window.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native(config: Config) -> eframe::Result<()> {
    tracing::info!("Initializing Mixdeck (native mode)");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.width, config.ui.height])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Mixdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "Mixdeck",
        native_options,
        Box::new(move |cc| Ok(Box::new(MixdeckApp::new(cc, config)))),
    )
}
