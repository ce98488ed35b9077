use std::{cell::RefCell, path::PathBuf, rc::Rc};

use cfgpick::core::ConfigPaths;

#[derive(Default)]
pub struct AppState {
    pub paths: ConfigPaths,
    /// Where `settings.json` lives; `None` disables persistence.
    pub settings_dir: Option<PathBuf>,
}

pub type SharedState = Rc<RefCell<AppState>>;
