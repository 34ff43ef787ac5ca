//! The UI renders the wizard state into something visible and vim-able.
//!
//! The draw function dispatches based on the current view. Prompt views show the answer being
//! typed above a live preview of the README, the section and license views are selectable lists,
//! and the detail view hosts the markdown editor.

use crate::app_state::{AppState, View};
use crate::license::License;
use crate::markdown::generate_markdown;
use edtui::{EditorTheme, EditorView, SyntaxHighlighter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    match app.current_view {
        View::Title => draw_prompt(f, app, "What is your project title?", &app.title),
        View::Username => draw_prompt(f, app, "What is your GitHub username?", &app.username),
        View::Email => draw_prompt(f, app, "What is your email address?", &app.email),
        View::Sections => draw_sections(f, app),
        View::License => draw_license(f, app),
        View::Detail | View::Command => draw_detail(f, app),
        View::Confirm | View::Done => draw_confirm(f, app),
    }
}

fn help_bar(f: &mut Frame, area: Rect, app: &AppState, help: &str) {
    let text = app.message.clone().unwrap_or_else(|| help.to_string());
    let help_widget = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

fn draw_preview(f: &mut Frame, area: Rect, app: &AppState) {
    let preview = Paragraph::new(generate_markdown(&app.request()))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Preview"));
    f.render_widget(preview, area);
}

fn draw_prompt(f: &mut Frame, app: &AppState, question: &str, answer: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Answer
            Constraint::Min(0),    // Preview
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let input = Paragraph::new(Line::from(vec![
        Span::raw(answer.to_string()),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(question));
    f.render_widget(input, chunks[0]);

    draw_preview(f, chunks[1], app);

    let help = if app.current_view == View::Title {
        "Enter: Continue | Esc: Quit"
    } else {
        "Enter: Continue (may be left blank) | Esc: Back"
    };
    help_bar(f, chunks[2], app, help);
}

fn draw_sections(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .choices
        .iter()
        .zip(&app.selected)
        .enumerate()
        .map(|(i, (choice, &ticked))| {
            let mark = if ticked { "[x]" } else { "[ ]" };
            let style = if i == app.current_choice_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if ticked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!("{mark} {choice}")).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select the sections you would like to add to your README"),
    );
    f.render_widget(list, chunks[0]);

    help_bar(
        f,
        chunks[1],
        app,
        "↑/↓: Navigate | Space: Toggle | Enter: Continue | Esc: Back",
    );
}

fn draw_license(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let items: Vec<ListItem> = License::ALL
        .iter()
        .enumerate()
        .map(|(i, license)| {
            let style = if i == app.license_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(license.display_name()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Which license covers your project?"),
    );
    f.render_widget(list, chunks[0]);

    help_bar(f, chunks[1], app, "↑/↓: Navigate | Enter: Choose | Esc: Back");
}

fn draw_detail(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(0),    // Editor
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let Some(section) = app.sections.get(app.current_section_index) else {
        return;
    };

    let breadcrumb = format!(
        "{} ({}/{})",
        app.detail_breadcrumb(),
        app.current_section_index + 1,
        app.sections.len()
    );
    let breadcrumb_widget = Paragraph::new(breadcrumb)
        .block(Block::default().borders(Borders::ALL).title("Navigation"));
    f.render_widget(breadcrumb_widget, chunks[0]);

    let max_width = app.get_max_line_width();
    let title = format!(
        "Can you provide information on {} for your project? (max line: {} chars)",
        section.name, max_width
    );

    if let Some(ref mut editor_state) = app.editor_state {
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);

        let syntax_highlighter = SyntaxHighlighter::new("dracula", "md");
        let editor = EditorView::new(editor_state)
            .theme(EditorTheme::default())
            .syntax_highlighter(Some(syntax_highlighter))
            .wrap(true);

        f.render_widget(editor, inner);
    }

    // Help/command line
    let help_text = if app.current_view == View::Command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        ":w Save | :x Save & Next | :wp Save & Prev | :q Skip | :q! Abort | Esc: Back".to_string()
    };

    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn draw_confirm(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let question = format!(
        "A README named {} already exists. Would you like to write over it?",
        app.output.display()
    );
    let prompt = Paragraph::new(Span::styled(
        question,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL).title("Confirm"));
    f.render_widget(prompt, chunks[0]);

    draw_preview(f, chunks[1], app);
    help_bar(f, chunks[2], app, "y: Overwrite | n: Keep existing file | Esc: Back");
}
