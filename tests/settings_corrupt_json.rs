use cfgpick::core::{load_settings, settings_file};
use tempfile::TempDir;

#[test]
fn load_settings_handles_corrupt_json() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    std::fs::write(settings_file(dir), "{ not json ").unwrap();
    assert!(
        load_settings(dir).is_none(),
        "should not panic or succeed on corrupt JSON"
    );
}

#[test]
fn load_settings_handles_wrong_shape() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    std::fs::write(settings_file(dir), "[1, 2, 3]").unwrap();
    assert!(load_settings(dir).is_none());
}
