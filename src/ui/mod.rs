// This module is only used when the `ui` feature is enabled.
slint::include_modules!();

pub mod handlers;
pub mod state;

pub use handlers::{on_clear_config_file, on_pick_config_file, refresh_path_labels};
pub use state::AppState;
