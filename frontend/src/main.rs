//! Mixdeck application.
//!
//! Supports both WASM (for web browsers) and native modes.

#![warn(clippy::all, rust_2018_idioms)]

// ============================================================================
// WASM Entry Point
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn main() {
    use mixdeck_frontend::{Config, MixdeckApp};
    use wasm_bindgen::JsCast;

    // Initialize panic handler for better error messages in browser console
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("mixdeck_canvas"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            tracing::error!("No canvas element with id mixdeck_canvas");
            return;
        };

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(MixdeckApp::new(cc, Config::default())))),
            )
            .await
        {
            tracing::error!("Failed to start eframe: {:?}", e);
        }
    });
}

// ============================================================================
// Native Entry Point
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::Parser;
    use mixdeck_frontend::{Config, ThemePreference};
    use std::path::PathBuf;

    /// Mixdeck - audio mixer mockup
    #[derive(Parser, Debug)]
    #[command(name = "mixdeck")]
    #[command(about = "Dual-bus audio mixer mockup", long_about = None)]
    #[command(version)]
    pub struct Args {
        /// Path to a TOML config file
        #[arg(short, long, env = "MIXDECK_CONFIG")]
        pub config: Option<PathBuf>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long)]
        pub log_level: Option<String>,

        /// Colour theme
        #[arg(long, value_enum)]
        pub theme: Option<ThemePreference>,
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        // Config is loaded before tracing so its log level can seed the filter
        let loaded = Config::from_figment(args.config.as_deref(), args.theme, args.log_level);

        let default_level = loaded
            .as_ref()
            .ok()
            .and_then(|config| config.logging.log_level.clone())
            .unwrap_or_else(|| "info".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
            )
            .init();

        let config = loaded.unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {:#}", e);
            Config::default()
        });

        tracing::info!("Starting Mixdeck in native mode (theme: {:?})", config.ui.theme);

        mixdeck_frontend::run_native(config)
            .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}
