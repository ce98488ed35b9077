use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::ConfigPaths;

/* ============================ Stored selection ============================ */

/// On-disk snapshot of the picker state: one JSON document under the per-user
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    pub version: u32,
    #[serde(default)]
    pub paths: ConfigPaths,
}

/// Per-user directory holding `settings.json`. `None` on platforms without a
/// resolvable home, which simply disables persistence.
#[must_use]
pub fn default_settings_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "cfgpick", "cfgpick")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[must_use]
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

#[must_use]
pub fn load_settings(dir: &Path) -> Option<AppSettings> {
    let data = fs::read(settings_file(dir)).ok()?;
    serde_json::from_slice::<AppSettings>(&data).ok()
}

pub fn save_settings(dir: &Path, settings: &AppSettings) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let path = settings_file(dir);
    let tmp = path.with_extension("json.tmp");

    let data = serde_json::to_vec_pretty(settings).map_err(|e| io::Error::other(e.to_string()))?;

    fs::write(&tmp, data)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}
