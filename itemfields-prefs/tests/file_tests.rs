use itemfields_prefs::{FilePreferences, PreferenceStore, PrefsError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const KEY: &str = "extensions.test.custom-field-data";

#[test]
fn missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let prefs = FilePreferences::open(dir.path().join("prefs.json")).unwrap();
    assert_eq!(prefs.get(KEY), None);
}

#[test]
fn blank_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "  \n").unwrap();
    let prefs = FilePreferences::open(&path).unwrap();
    assert_eq!(prefs.get(KEY), None);
}

#[test]
fn set_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    {
        let prefs = FilePreferences::open(&path).unwrap();
        prefs.set(KEY, "Shelf;start|Notes;end").unwrap();
    }
    let reopened = FilePreferences::open(&path).unwrap();
    assert_eq!(reopened.get(KEY).as_deref(), Some("Shelf;start|Notes;end"));
}

#[test]
fn file_is_flat_json_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    let prefs = FilePreferences::open(&path).unwrap();
    prefs.set(KEY, "a;end").unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object[KEY], "a;end");
}

#[test]
fn nested_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile").join("prefs").join("prefs.json");
    let prefs = FilePreferences::open(&path).unwrap();
    assert!(prefs.init_default(KEY, "").unwrap());
    assert!(path.exists());
    assert_eq!(prefs.path(), path.as_path());
}

#[test]
fn corrupt_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").unwrap();
    let err = FilePreferences::open(&path).err().unwrap();
    assert!(matches!(err, PrefsError::Serialization(_)));
}

#[test]
fn subscriber_sees_persisted_value() {
    let dir = TempDir::new().unwrap();
    let prefs = FilePreferences::open(dir.path().join("prefs.json")).unwrap();
    let mut sub = prefs.subscribe(KEY);
    prefs.set(KEY, "x;afterCreators").unwrap();
    assert_eq!(sub.try_next().as_deref(), Some("x;afterCreators"));
}

#[test]
fn failed_write_leaves_value_and_subscribers_untouched() {
    let dir = TempDir::new().unwrap();
    let prefs = FilePreferences::open(dir.path().join("prefs.json")).unwrap();
    let mut sub = prefs.subscribe(KEY);
    // A directory in the way of the temporary file makes the write fail.
    fs::create_dir(dir.path().join("prefs.json.tmp")).unwrap();
    assert!(prefs.set(KEY, "a;end").is_err());
    assert_eq!(prefs.get(KEY), None);
    assert_eq!(sub.try_next(), None);
}
