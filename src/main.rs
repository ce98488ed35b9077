#![allow(clippy::needless_return)]

#[cfg(feature = "ui")]
mod ui;

#[cfg(feature = "ui")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "ui")]
use slint::ComponentHandle;

#[cfg(feature = "ui")]
use ui::{AppState, AppWindow, on_clear_config_file, on_pick_config_file, refresh_path_labels};

#[cfg(feature = "ui")]
fn main() -> anyhow::Result<()> {
    use cfgpick::core::{default_settings_dir, load_settings};

    let app = AppWindow::new()?;

    app.set_app_version(env!("CARGO_PKG_VERSION").into());
    app.set_status_line("No config file selected".into());

    let settings_dir = default_settings_dir();
    let paths = settings_dir
        .as_deref()
        .and_then(load_settings)
        .map(|s| s.paths)
        .unwrap_or_default();

    let state = Rc::new(RefCell::new(AppState {
        paths,
        settings_dir,
    }));

    refresh_path_labels(&app, &state);

    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_pick_config_file(move || {
            if let Some(app) = app_weak.upgrade() {
                on_pick_config_file(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_clear_config_file(move || {
            if let Some(app) = app_weak.upgrade() {
                on_clear_config_file(&app, &state);
            }
        });
    }

    app.run()?;
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn main() -> anyhow::Result<()> {
    eprintln!(
        "Built without the `ui` feature; nothing to run. \
Enable it with `--features ui`, or just run tests with `--no-default-features`."
    );
    Ok(())
}
