use super::{AppState, Flow, View};
use crate::config::Config;
use crate::license::License;
use std::fs;
use tempfile::TempDir;

fn app_in(dir: &TempDir) -> AppState {
    AppState::new(&Config::default(), dir.path().join("README.md"))
}

fn tick(app: &mut AppState, name: &str) {
    let index = app.choices.iter().position(|c| c == name).unwrap();
    app.current_choice_index = index;
    app.toggle_choice();
}

fn type_into_editor(app: &mut AppState, text: &str) {
    if let Some(ref mut editor_state) = app.editor_state {
        editor_state.lines = edtui::Lines::from(text);
    }
}

#[test]
fn test_blank_title_rejected() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.title = "   ".to_string();

    assert!(!app.submit_title());
    assert_eq!(app.current_view, View::Title);
    assert!(app.message.is_some());

    app.title = "Widget".to_string();
    assert!(app.submit_title());
    assert_eq!(app.current_view, View::Sections);
}

#[test]
fn test_pseudo_sections_set_flags() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Table of Contents");
    tick(&mut app, "License");
    tick(&mut app, "Usage Information");

    app.confirm_sections();

    assert!(app.want_table_of_contents);
    assert!(app.license_enabled);
    assert_eq!(app.sections.len(), 1);
    assert_eq!(app.sections[0].name, "Usage Information");
    assert_eq!(app.current_view, View::Detail);
    assert!(app.editor_state.is_some());
}

#[test]
fn test_no_body_sections_skips_editor() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Table of Contents");

    app.confirm_sections();
    assert_eq!(app.current_view, View::Username);
}

#[test]
fn test_editor_walks_sections_in_order() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Installation Instructions");
    tick(&mut app, "Tests");
    tick(&mut app, "License");
    app.confirm_sections();

    type_into_editor(&mut app, "\n\nRun the installer.\n\n");
    app.command_buffer = "x".to_string();
    assert_eq!(app.execute_command(), Flow::Continue);
    assert_eq!(app.current_section_index, 1);
    assert_eq!(app.sections[0].text, "Run the installer.");

    type_into_editor(&mut app, "cargo test\n");
    app.command_buffer = "wn".to_string();
    app.execute_command();

    assert_eq!(app.sections[1].text, "cargo test");
    assert_eq!(app.current_view, View::License);
}

#[test]
fn test_previous_section_keeps_text() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Dependencies");
    tick(&mut app, "Tests");
    app.confirm_sections();

    type_into_editor(&mut app, "None.");
    app.next_section();
    app.prev_section();

    assert_eq!(app.current_section_index, 0);
    let editor_state = app.editor_state.as_ref().unwrap();
    let first_row: String = editor_state.lines.iter_row().next().unwrap().iter().collect();
    assert_eq!(first_row, "None.");
}

#[test]
fn test_force_quit_from_editor() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Tests");
    app.confirm_sections();

    app.command_buffer = "q!".to_string();
    assert_eq!(app.execute_command(), Flow::Quit);
}

#[test]
fn test_unknown_command_reports() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Tests");
    app.confirm_sections();

    app.command_buffer = "zz".to_string();
    assert_eq!(app.execute_command(), Flow::Continue);
    assert_eq!(app.message.as_deref(), Some("Unknown command: zz"));
    assert_eq!(app.current_view, View::Detail);
}

#[test]
fn test_license_choice_reaches_request() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.title = "Widget".to_string();
    tick(&mut app, "License");
    app.confirm_sections();
    assert_eq!(app.current_view, View::License);

    let mit = License::ALL.iter().position(|&l| l == License::Mit).unwrap();
    for _ in 0..mit {
        app.license_down();
    }
    app.submit_license();

    let request = app.request();
    assert_eq!(request.license.as_deref(), Some("mit"));
    assert_eq!(app.current_view, View::Username);
}

#[test]
fn test_contact_then_done_when_output_missing() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.current_view = View::Username;
    app.username = " octocat ".to_string();
    app.submit_username();
    app.submit_email();

    assert!(app.is_done());
    assert_eq!(app.overwrite, None);

    let request = app.request();
    assert_eq!(request.username.as_deref(), Some("octocat"));
    assert_eq!(request.email, None);
}

#[test]
fn test_existing_output_asks_to_confirm() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# Old\n").unwrap();
    let mut app = app_in(&dir);
    app.current_view = View::Email;

    app.submit_email();
    assert_eq!(app.current_view, View::Confirm);

    app.answer_overwrite(false);
    assert!(app.is_done());
    assert_eq!(app.overwrite, Some(false));
}

#[test]
fn test_skip_confirm_finishes_over_existing_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# Old\n").unwrap();
    let mut app = app_in(&dir).with_skip_confirm(true);
    app.current_view = View::Email;

    app.submit_email();
    assert!(app.is_done());
    assert_eq!(app.overwrite, None);
}

#[test]
fn test_save_reports_lines_over_wrap_width() {
    let dir = TempDir::new().unwrap();
    let cfg = Config {
        wrap_width: 10,
        ..Config::default()
    };
    let mut app = AppState::new(&cfg, dir.path().join("README.md"));
    tick(&mut app, "Tests");
    app.confirm_sections();

    type_into_editor(&mut app, "short\nthis line is too long\nok");
    assert_eq!(app.overlong_lines(), vec![2]);
    app.save_current();
    assert_eq!(
        app.message.as_deref(),
        Some("Saved (line 2 is over 10 chars)")
    );
    assert_eq!(app.sections[0].text, "short\nthis line is too long\nok");

    type_into_editor(&mut app, "fits");
    app.save_current();
    assert_eq!(app.message.as_deref(), Some("Saved"));
}

#[test]
fn test_detail_breadcrumb_follows_cursor_heading() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.title = " Widget ".to_string();
    tick(&mut app, "Usage Information");
    app.confirm_sections();
    assert_eq!(app.detail_breadcrumb(), "Widget > Usage Information");

    type_into_editor(&mut app, "intro\n### Flags\n#### Verbose\n-v\n### Config");
    if let Some(ref mut editor_state) = app.editor_state {
        editor_state.cursor = edtui::Index2::new(3, 0);
    }
    assert_eq!(
        app.detail_breadcrumb(),
        "Widget > Usage Information > Flags > Verbose"
    );
}

#[test]
fn test_reselecting_sections_keeps_written_text() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Tests");
    app.confirm_sections();
    type_into_editor(&mut app, "cargo test");

    app.go_back();
    assert_eq!(app.current_view, View::Sections);

    tick(&mut app, "Contributing");
    app.confirm_sections();

    let tests = app.sections.iter().find(|s| s.name == "Tests").unwrap();
    assert_eq!(tests.text, "cargo test");
    assert_eq!(app.sections.len(), 2);
}

#[test]
fn test_go_back_from_username_without_license() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    tick(&mut app, "Tests");
    app.confirm_sections();
    app.next_section();
    assert_eq!(app.current_view, View::Username);

    app.go_back();
    assert_eq!(app.current_view, View::Detail);
    assert_eq!(app.current_section_index, 0);
}
