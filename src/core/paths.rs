use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/* ============================ Config path state ============================ */

/// The currently selected config file plus the selection it replaced.
///
/// An empty `config_file` means "nothing selected". The previous path is only
/// ever captured by [`ConfigPaths::clear_paths`]; picking a new file does not
/// touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPaths {
    config_file: String,
    #[serde(default)]
    previous_config_file: Option<String>,
}

impl ConfigPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    #[must_use]
    pub fn previous_config_file(&self) -> Option<&str> {
        self.previous_config_file.as_deref()
    }

    /// Replaces the current selection unconditionally. The path is not checked
    /// for existence; the dialog (or a later config loader) owns that concern.
    pub fn set_config_file(&mut self, path: impl Into<String>) {
        self.config_file = path.into();
    }

    /// Archives a non-empty current selection into the previous slot, then
    /// empties the current one. Calling this on an already-cleared state
    /// changes nothing.
    pub fn clear_paths(&mut self) {
        if !self.config_file.is_empty() {
            self.previous_config_file = Some(std::mem::take(&mut self.config_file));
        }
    }

    /// Starting point offered to the next file dialog.
    #[must_use]
    pub fn suggested_file_picker_path(&self) -> Option<&str> {
        suggested_picker_path(&self.config_file, self.previous_config_file.as_deref())
    }
}

/// The current selection wins; otherwise fall back to the previous one.
#[must_use]
pub fn suggested_picker_path<'a>(
    config_file: &'a str,
    previous_config_file: Option<&'a str>,
) -> Option<&'a str> {
    if !config_file.is_empty() {
        return Some(config_file);
    }
    previous_config_file.filter(|p| !p.is_empty())
}

/// Splits a dialog suggestion into the directory and file-name seeds the
/// native dialog accepts. Either half may be missing (bare file name, or a
/// path with no final component).
#[must_use]
pub fn picker_hint_parts(hint: &str) -> (Option<PathBuf>, Option<String>) {
    let path = Path::new(hint);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string());
    (dir, file)
}
