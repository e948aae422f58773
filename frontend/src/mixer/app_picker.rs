//! Multi-select picker for the applications routed to a channel.

use egui::{ComboBox, PopupCloseBehavior, Ui};
use std::hash::Hash;

/// Toggle `app` in `selected`: present names are removed, absent names appended.
pub fn toggle_app(selected: &[String], app: &str) -> Vec<String> {
    if selected.iter().any(|s| s == app) {
        selected.iter().filter(|s| *s != app).cloned().collect()
    } else {
        let mut updated = selected.to_vec();
        updated.push(app.to_string());
        updated
    }
}

/// Collapsed label of the picker.
pub fn picker_label(selected: &[String]) -> String {
    match selected {
        [] => "Select apps".to_string(),
        [single] => single.clone(),
        many => format!("{} apps", many.len()),
    }
}

/// Render the picker. Returns the full updated selection when the user
/// toggled an application this frame.
///
/// The popup stays open while toggling and closes on a click outside it.
pub fn app_picker(
    ui: &mut Ui,
    id_salt: impl Hash,
    selected: &[String],
    applications: &[String],
    width: f32,
) -> Option<Vec<String>> {
    let mut updated = None;

    ComboBox::from_id_salt(id_salt)
        .width(width)
        .selected_text(picker_label(selected))
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui| {
            for app in applications {
                let mut checked = selected.contains(app);
                if ui.checkbox(&mut checked, app).changed() {
                    updated = Some(toggle_app(selected, app));
                }
            }
        });

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picker_label() {
        assert_eq!(picker_label(&[]), "Select apps");
        assert_eq!(picker_label(&names(&["Chrome"])), "Chrome");
        assert_eq!(
            picker_label(&names(&["Chrome", "Spotify", "Discord"])),
            "3 apps"
        );
    }

    #[test]
    fn test_toggle_appends_absent_app() {
        let selected = names(&["Chrome"]);
        assert_eq!(toggle_app(&selected, "Spotify"), names(&["Chrome", "Spotify"]));
    }

    #[test]
    fn test_toggle_removes_present_app() {
        let selected = names(&["Chrome", "Spotify", "Discord"]);
        assert_eq!(toggle_app(&selected, "Spotify"), names(&["Chrome", "Discord"]));
        assert!(toggle_app(&names(&["Chrome"]), "Chrome").is_empty());
    }
}
