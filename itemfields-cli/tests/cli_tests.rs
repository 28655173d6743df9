use clap::Parser;
use itemfields_cli::{run, Args};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn exec(prefs: &Path, argv: &[&str]) -> anyhow::Result<String> {
    let prefs = prefs.to_str().unwrap();
    let mut full = vec!["itemfields", "--prefs", prefs];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full)?;
    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");

    exec(&prefs, &["add", "Shelf"]).unwrap();
    exec(&prefs, &["add", "Loaned to", "--position", "afterCreators"]).unwrap();

    assert_eq!(
        exec(&prefs, &["list"]).unwrap(),
        "Shelf\tstart\nLoaned to\tafterCreators\n"
    );
}

#[test]
fn add_rejects_invalid_names() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");

    exec(&prefs, &["add", "Shelf"]).unwrap();
    assert!(exec(&prefs, &["add", "Shelf"]).is_err());
    assert!(exec(&prefs, &["add", "a;b"]).is_err());
    assert_eq!(exec(&prefs, &["list"]).unwrap(), "Shelf\tstart\n");
}

#[test]
fn remove_and_reset() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");

    exec(&prefs, &["add", "a", "--position", "end"]).unwrap();
    exec(&prefs, &["add", "b"]).unwrap();
    exec(&prefs, &["remove", "a"]).unwrap();
    assert_eq!(exec(&prefs, &["list"]).unwrap(), "b\tstart\n");
    assert!(exec(&prefs, &["remove", "missing"]).is_err());

    exec(&prefs, &["reset"]).unwrap();
    assert_eq!(exec(&prefs, &["list"]).unwrap(), "");
}

#[test]
fn codec_passthrough() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");

    assert_eq!(
        exec(&prefs, &["encode", "Shelf:start", "Loaned to:afterCreators"]).unwrap(),
        "Shelf;start|Loaned to;afterCreators\n"
    );
    assert_eq!(
        exec(&prefs, &["decode", "Shelf;start|Notes;sideways"]).unwrap(),
        "Shelf\tstart\nNotes\tsideways\n"
    );
    assert!(exec(&prefs, &["encode", "no-position"]).is_err());
    assert!(!prefs.exists());
}

#[test]
fn rows_uses_config_prefix() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("prefs.json");
    let config = dir.path().join("itemfields.toml");
    std::fs::write(&config, "pref_prefix = \"ext.test\"\nrow_id_prefix = \"t\"\n").unwrap();
    let config = config.to_str().unwrap();

    exec(&prefs, &["--config", config, "add", "Shelf", "--position", "end"]).unwrap();
    assert_eq!(
        exec(&prefs, &["--config", config, "rows"]).unwrap(),
        "t-Shelf-end\tShelf\tend\n"
    );
    // Without the config the default preference key is empty.
    assert_eq!(exec(&prefs, &["rows"]).unwrap(), "");
}
