use super::{is_yes, write_readme, AlwaysOverwrite, PromptConfirm, WriteOutcome};
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_writes_new_file_without_asking() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    let mut asked = false;
    let mut confirm = |_: &Path| -> io::Result<bool> {
        asked = true;
        Ok(false)
    };

    let outcome = write_readme(&path, "# New\n", &mut confirm).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert!(!asked);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# New\n");
}

#[test]
fn test_declined_overwrite_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Precious\n").unwrap();

    let mut confirm = |_: &Path| -> io::Result<bool> { Ok(false) };
    let outcome = write_readme(&path, "# Replacement\n", &mut confirm).unwrap();

    assert_eq!(outcome, WriteOutcome::Declined);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Precious\n");
}

#[test]
fn test_confirmed_overwrite_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Old\n").unwrap();

    let outcome = write_readme(&path, "# New\n", &mut AlwaysOverwrite).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# New\n");
}

#[test]
fn test_prompt_reads_answer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Old\n").unwrap();

    let mut prompt_out = Vec::new();
    let mut confirm = PromptConfirm::new(Cursor::new("yes\n"), &mut prompt_out);
    let outcome = write_readme(&path, "# New\n", &mut confirm).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    let prompt = String::from_utf8(prompt_out).unwrap();
    assert!(prompt.contains("already exists"), "{prompt}");
}

#[test]
fn test_prompt_defaults_to_no() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Old\n").unwrap();

    let mut confirm = PromptConfirm::new(Cursor::new(""), io::sink());
    let outcome = write_readme(&path, "# New\n", &mut confirm).unwrap();

    assert_eq!(outcome, WriteOutcome::Declined);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Old\n");
}

#[test]
fn test_yes_answers() {
    assert!(is_yes("y"));
    assert!(is_yes(" YES \n"));
    assert!(!is_yes(""));
    assert!(!is_yes("n"));
    assert!(!is_yes("yep"));
}

#[test]
fn test_write_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("README.md");

    let err = write_readme(&path, "# New\n", &mut AlwaysOverwrite).unwrap_err();
    assert!(err.to_string().contains("missing"));
}
