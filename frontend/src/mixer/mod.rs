//! Mixer console components.
//!
//! Components never touch [`mixdeck_types::MixerState`] directly. They read a
//! snapshot and push [`mixdeck_types::MixerAction`]s that the app applies
//! once the frame has been laid out.

mod add_channel;
mod app_picker;
mod master;
mod strip;
mod widgets;

pub use add_channel::{AddChannelEntry, AddChannelModal};
pub use app_picker::{app_picker, picker_label, toggle_app};
pub use master::master_output;
pub use strip::{channel_strip, DeleteConfirmation, StripResponse};
pub use widgets::{bus_column, device_combo, BusColumnResponse};

// ── Layout constants ─────────────────────────────────────────────────
/// Gap between strips
pub(crate) const STRIP_GAP: f32 = 8.0;
/// Inner margin inside each strip frame
pub(crate) const STRIP_MARGIN: f32 = 8.0;
/// Inner width of a channel strip (two bus columns)
pub(crate) const STRIP_INNER: f32 = 128.0;
/// Inner width of a master strip (one bus column)
pub(crate) const MASTER_INNER: f32 = 120.0;
/// Width of one bus column
pub(crate) const COLUMN_WIDTH: f32 = 56.0;
/// Height of the fader + meter area
pub(crate) const FADER_HEIGHT: f32 = 180.0;
/// Standard button height (mute)
pub(crate) const BTN_H: f32 = 20.0;
/// Opacity of the strip being dragged
pub(crate) const DRAGGED_OPACITY: f32 = 0.5;
