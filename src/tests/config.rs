use super::{Config, LICENSE, TABLE_OF_CONTENTS};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("readmegen.toml"));

    assert_eq!(config, Config::default());
    assert_eq!(config.output, "README.md");
    assert!(config.section_choices.iter().any(|s| s == TABLE_OF_CONTENTS));
    assert!(config.section_choices.iter().any(|s| s == LICENSE));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readmegen.toml");
    fs::write(&path, "output = \"docs/README.md\"\n").unwrap();

    let config = Config::load_from(&path);

    assert_eq!(config.output, "docs/README.md");
    assert_eq!(config.wrap_width, 100);
    assert_eq!(config.section_choices, Config::default().section_choices);
}

#[test]
fn test_custom_choices() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readmegen.toml");
    fs::write(
        &path,
        "wrap_width = 72\nsection_choices = [\"Usage\", \"FAQ\"]\n",
    )
    .unwrap();

    let config = Config::load_from(&path);

    assert_eq!(config.wrap_width, 72);
    assert_eq!(config.section_choices, vec!["Usage", "FAQ"]);
}

#[test]
fn test_invalid_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readmegen.toml");
    fs::write(&path, "wrap_width = \"wide\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
