use super::AppWindow;
use crate::ui::state::SharedState;
use chrono::Local;

use cfgpick::core::{AppSettings, picker_hint_parts, save_settings};

/* =============================== UI Actions =============================== */

pub fn on_pick_config_file(app: &AppWindow, state: &SharedState) {
    let hint = {
        let s = state.borrow();
        s.paths.suggested_file_picker_path().map(str::to_string)
    };

    let mut dialog = rfd::FileDialog::new();
    if let Some(hint) = &hint {
        let (dir, file) = picker_hint_parts(hint);
        if let Some(dir) = dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(file) = file {
            dialog = dialog.set_file_name(file);
        }
    }

    // Blocks until the user picks or dismisses. `None` covers both a cancel
    // and a platform dialog that failed to open; rfd does not distinguish.
    if let Some(path) = dialog.pick_file() {
        let chosen = dunce::simplified(&path).display().to_string();
        {
            let mut s = state.borrow_mut();
            s.paths.set_config_file(chosen);
        }
        persist_paths(state);
        refresh_path_labels(app, state);
        set_status(app, "Config file selected");
    }
}

pub fn on_clear_config_file(app: &AppWindow, state: &SharedState) {
    {
        let mut s = state.borrow_mut();
        s.paths.clear_paths();
    }
    persist_paths(state);
    refresh_path_labels(app, state);
    set_status(app, "Selection cleared");
}

pub fn refresh_path_labels(app: &AppWindow, state: &SharedState) {
    let s = state.borrow();
    app.set_config_file(s.paths.config_file().into());
    app.set_previous_config_file(s.paths.previous_config_file().unwrap_or_default().into());
    app.set_suggested_path(s.paths.suggested_file_picker_path().unwrap_or_default().into());
}

fn persist_paths(state: &SharedState) {
    let s = state.borrow();
    if let Some(dir) = &s.settings_dir {
        let settings = AppSettings {
            version: 1,
            paths: s.paths.clone(),
        };
        // Best-effort; a failed save must not break the interaction.
        let _ = save_settings(dir, &settings);
    }
}

fn set_status(app: &AppWindow, what: &str) {
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    app.set_status_line(format!("{what} at {now_str}").into());
}
