//! The wizard state machine collecting the answers a README is generated from.
//!
//! The terminal loop feeds key presses into this state and the UI renders it, so all of the
//! prompting logic lives here where it can be tested without a terminal. Steps run in a fixed
//! order, skipping those the earlier answers make irrelevant:
//!
//! ```text
//! Title -> Sections -> Detail (one per chosen section) -> License -> Username -> Email -> Confirm
//!                                                          (if chosen)              (if file exists)
//! ```

use crate::config::{Config, LICENSE, TABLE_OF_CONTENTS};
use crate::license::License;
use crate::markdown::SECTION_LEVEL;
use crate::request::{DocumentRequest, SectionEntry};
use crate::section::{Section, SectionTree};
use edtui::{EditorState, Lines};
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Single-line project title input.
    Title,
    /// Checkbox list of sections to include.
    Sections,
    /// Vim-like markdown editor for one section's body.
    Detail,
    /// Captures vim-style command input after ':' in the editor.
    Command,
    /// Choice among the supported licenses.
    License,
    /// Single-line GitHub username input.
    Username,
    /// Single-line contact email input.
    Email,
    /// Yes/no prompt before replacing an existing output file.
    Confirm,
    /// All answers collected.
    Done,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Whether the terminal loop should keep running after a command.
pub enum Flow {
    /// Keep collecting input.
    Continue,
    /// Leave the wizard without writing anything.
    Quit,
}

/// Answers collected so far plus the cursor state of the active step.
pub struct AppState {
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Project title typed so far.
    pub title: String,
    /// Section names offered for selection.
    pub choices: Vec<String>,
    /// Checkbox state parallel to `choices`.
    pub selected: Vec<bool>,
    /// Highlighted row in the section list.
    pub current_choice_index: usize,
    /// Chosen body sections, in the order they will appear.
    pub sections: Vec<SectionEntry>,
    /// Section loaded in the editor.
    pub current_section_index: usize,
    /// Editor buffer content when detail view is active.
    pub editor_state: Option<EditorState>,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Whether "Table of Contents" was ticked.
    pub want_table_of_contents: bool,
    /// Whether "License" was ticked, enabling the license step.
    pub license_enabled: bool,
    /// Highlighted row in the license list.
    pub license_index: usize,
    /// Confirmed license choice.
    pub license: Option<License>,
    /// GitHub username typed so far.
    pub username: String,
    /// Contact email typed so far.
    pub email: String,
    /// File the README will be written to.
    pub output: PathBuf,
    /// Answer to the overwrite prompt, if it was asked.
    pub overwrite: Option<bool>,
    /// Finish without the overwrite prompt, e.g. when printing or forcing the write.
    pub skip_confirm: bool,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Line width shown as a guide in the editor title. Text is not rewrapped.
    pub wrap_width: usize,
}

impl AppState {
    #[must_use]
    /// Initialises the wizard at the title prompt with the configured section choices.
    pub fn new(cfg: &Config, output: PathBuf) -> Self {
        Self {
            current_view: View::Title,
            title: String::new(),
            choices: cfg.section_choices.clone(),
            selected: vec![false; cfg.section_choices.len()],
            current_choice_index: 0,
            sections: Vec::new(),
            current_section_index: 0,
            editor_state: None,
            command_buffer: String::new(),
            want_table_of_contents: false,
            license_enabled: false,
            license_index: 0,
            license: None,
            username: String::new(),
            email: String::new(),
            output,
            overwrite: None,
            skip_confirm: false,
            message: None,
            wrap_width: cfg.wrap_width,
        }
    }

    #[must_use]
    /// Skips the overwrite prompt at the end of the wizard.
    pub fn with_skip_confirm(mut self, skip_confirm: bool) -> Self {
        self.skip_confirm = skip_confirm;
        self
    }

    #[must_use]
    /// The request described by the answers collected so far.
    pub fn request(&self) -> DocumentRequest {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        DocumentRequest {
            title: self.title.trim().to_string(),
            license: self.license.map(|l| l.id().to_string()),
            sections: self.sections.clone(),
            username: optional(&self.username),
            email: optional(&self.email),
            want_table_of_contents: self.want_table_of_contents,
        }
    }

    /// The single-line buffer edited by the active view, if any.
    pub fn input_buffer_mut(&mut self) -> Option<&mut String> {
        match self.current_view {
            View::Title => Some(&mut self.title),
            View::Username => Some(&mut self.username),
            View::Email => Some(&mut self.email),
            View::Command => Some(&mut self.command_buffer),
            _ => None,
        }
    }

    // --- Title ---

    /// Accepts the title if it has any non-whitespace content.
    pub fn submit_title(&mut self) -> bool {
        if self.title.trim().is_empty() {
            self.message = Some("Please enter a project title".to_string());
            return false;
        }
        self.message = None;
        self.current_view = View::Sections;
        true
    }

    // --- Section selection ---

    /// Moves the section list cursor up.
    pub fn choice_up(&mut self) {
        self.current_choice_index = self.current_choice_index.saturating_sub(1);
    }

    /// Moves the section list cursor down.
    pub fn choice_down(&mut self) {
        if self.current_choice_index + 1 < self.choices.len() {
            self.current_choice_index += 1;
        }
    }

    /// Ticks or unticks the highlighted section.
    pub fn toggle_choice(&mut self) {
        if let Some(selected) = self.selected.get_mut(self.current_choice_index) {
            *selected = !*selected;
        }
    }

    /// Turns the ticked choices into body sections and moves on.
    ///
    /// The "Table of Contents" and "License" choices set flags rather than producing sections.
    /// Text already written for a section survives going back and re-selecting it.
    pub fn confirm_sections(&mut self) {
        self.want_table_of_contents = false;
        self.license_enabled = false;

        let previous = std::mem::take(&mut self.sections);
        for (choice, &ticked) in self.choices.iter().zip(&self.selected) {
            if !ticked {
                continue;
            }
            match choice.as_str() {
                TABLE_OF_CONTENTS => self.want_table_of_contents = true,
                LICENSE => self.license_enabled = true,
                name => {
                    let entry = previous
                        .iter()
                        .find(|s| s.name == name)
                        .cloned()
                        .unwrap_or_else(|| SectionEntry::new(name, ""));
                    self.sections.push(entry);
                }
            }
        }

        if !self.license_enabled {
            self.license = None;
        }

        tracing::debug!(
            sections = self.sections.len(),
            toc = self.want_table_of_contents,
            license = self.license_enabled,
            "sections chosen"
        );

        self.current_section_index = 0;
        if self.sections.is_empty() {
            self.advance_past_sections();
        } else {
            self.enter_detail_view();
        }
    }

    // --- Section editing ---

    /// Loads the current section's body into the editor buffer.
    pub fn enter_detail_view(&mut self) {
        let Some(section) = self.sections.get(self.current_section_index) else {
            return;
        };

        let lines_text = if section.text.trim().is_empty() {
            "\n".to_string()
        } else {
            format!("{}\n", section.text.trim_end())
        };

        self.editor_state = Some(EditorState::new(Lines::from(lines_text.as_str())));
        self.current_view = View::Detail;
    }

    /// Stores the editor content as the current section's body.
    ///
    /// Blank lines at either end are dropped.
    pub fn save_current(&mut self) {
        let Some(ref editor_state) = self.editor_state else {
            return;
        };

        let raw_content = editor_state
            .lines
            .iter_row()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        if let Some(section) = self.sections.get_mut(self.current_section_index) {
            section.text = raw_content
                .trim_end()
                .trim_start_matches(['\r', '\n'])
                .to_string();
        }
        self.message = Some(match self.overlong_lines().as_slice() {
            [] => "Saved".to_string(),
            [line] => format!("Saved (line {line} is over {} chars)", self.wrap_width),
            lines => format!("Saved ({} lines over {} chars)", lines.len(), self.wrap_width),
        });
    }

    #[must_use]
    /// Returns the following section index for sequential navigation.
    pub fn find_next_section(&self) -> Option<usize> {
        (self.current_section_index + 1 < self.sections.len())
            .then_some(self.current_section_index + 1)
    }

    #[must_use]
    /// Returns the preceding section index for reverse navigation.
    pub fn find_prev_section(&self) -> Option<usize> {
        self.current_section_index.checked_sub(1)
    }

    /// Saves the current section and opens the next one, or moves past the editors.
    pub fn next_section(&mut self) {
        self.save_current();
        self.editor_state = None;
        if let Some(next) = self.find_next_section() {
            self.current_section_index = next;
            self.enter_detail_view();
        } else {
            self.advance_past_sections();
        }
    }

    /// Saves the current section and reopens the previous one, or returns to the section list.
    pub fn prev_section(&mut self) {
        self.save_current();
        self.editor_state = None;
        if let Some(prev) = self.find_prev_section() {
            self.current_section_index = prev;
            self.enter_detail_view();
        } else {
            self.current_view = View::Sections;
        }
    }

    /// Runs the command typed after ':' in the editor.
    pub fn execute_command(&mut self) -> Flow {
        let cmd = std::mem::take(&mut self.command_buffer);
        self.current_view = View::Detail;

        match cmd.trim() {
            "w" => self.save_current(),
            "x" | "wn" => self.next_section(),
            "wp" => self.prev_section(),
            "q" => {
                self.editor_state = None;
                if self.find_next_section().is_some() {
                    self.current_section_index += 1;
                    self.enter_detail_view();
                } else {
                    self.advance_past_sections();
                }
            }
            "q!" => return Flow::Quit,
            _ => self.message = Some(format!("Unknown command: {cmd}")),
        }
        Flow::Continue
    }

    fn advance_past_sections(&mut self) {
        self.message = None;
        self.current_view = if self.license_enabled {
            View::License
        } else {
            View::Username
        };
    }

    // --- License ---

    /// Moves the license cursor up.
    pub fn license_up(&mut self) {
        self.license_index = self.license_index.saturating_sub(1);
    }

    /// Moves the license cursor down.
    pub fn license_down(&mut self) {
        if self.license_index + 1 < License::ALL.len() {
            self.license_index += 1;
        }
    }

    /// Accepts the highlighted license.
    pub fn submit_license(&mut self) {
        self.license = License::ALL.get(self.license_index).copied();
        self.current_view = View::Username;
    }

    // --- Contact ---

    /// Accepts the username, which may be left blank.
    pub fn submit_username(&mut self) {
        self.current_view = View::Email;
    }

    /// Accepts the email, then asks about overwriting if the output file already exists.
    pub fn submit_email(&mut self) {
        if !self.skip_confirm && self.output.exists() {
            self.current_view = View::Confirm;
        } else {
            self.current_view = View::Done;
        }
    }

    /// Records the overwrite answer and finishes the wizard.
    pub fn answer_overwrite(&mut self, overwrite: bool) {
        self.overwrite = Some(overwrite);
        self.current_view = View::Done;
    }

    #[must_use]
    /// Whether every answer has been collected.
    pub fn is_done(&self) -> bool {
        self.current_view == View::Done
    }

    /// Steps back to the previous prompt.
    pub fn go_back(&mut self) {
        self.message = None;
        self.current_view = match self.current_view {
            View::Title | View::Sections => View::Title,
            View::Detail | View::Command => {
                self.save_current();
                self.editor_state = None;
                View::Sections
            }
            View::License => self.last_editor_or_sections(),
            View::Username => {
                if self.license_enabled {
                    View::License
                } else {
                    self.last_editor_or_sections()
                }
            }
            View::Email => View::Username,
            View::Confirm | View::Done => View::Email,
        };
    }

    fn last_editor_or_sections(&mut self) -> View {
        if self.sections.is_empty() {
            return View::Sections;
        }
        self.current_section_index = self.sections.len() - 1;
        self.enter_detail_view();
        View::Detail
    }

    #[must_use]
    /// Path from the title to the heading the editor cursor sits under, joined with `>`.
    ///
    /// Headings typed above the cursor extend the path below the section being edited.
    pub fn detail_breadcrumb(&self) -> String {
        let Some(entry) = self.sections.get(self.current_section_index) else {
            return String::new();
        };
        let above_cursor = self.editor_state.as_ref().map_or_else(String::new, |state| {
            state
                .lines
                .iter_row()
                .take(state.cursor.row + 1)
                .map(|line| line.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        });

        let mut outline = SectionTree::new();
        let title = outline.insert(Section::new(self.title.trim(), 1), None);
        let section = outline.insert(Section::new(entry.name.trim(), SECTION_LEVEL), Some(title));
        outline.graft(section, SectionTree::parse(&above_cursor));
        outline.breadcrumb(outline.len() - 1).join(" > ")
    }

    #[must_use]
    /// Guide width for editor text, as configured by `wrap_width`.
    pub fn get_max_line_width(&self) -> usize {
        self.wrap_width
    }

    #[must_use]
    /// One-based numbers of the editor lines longer than the guide width.
    pub fn overlong_lines(&self) -> Vec<usize> {
        let Some(editor_state) = &self.editor_state else {
            return Vec::new();
        };
        editor_state
            .lines
            .iter_row()
            .enumerate()
            .filter(|(_, line)| line.len() > self.wrap_width)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
