//! readmegen: An interactive README generator.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use edtui::EditorEventHandler;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use readmegen::app_state::{AppState, Flow, View};
use readmegen::error::{Error, Result};
use readmegen::output::{self, AlwaysOverwrite, PromptConfirm, WriteOutcome};
use readmegen::{config, markdown, request::DocumentRequest};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(version, about = "Generate a README from a few questions", long_about = None)]
struct Args {
    /// File to write the README to
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Load answers from a JSON file instead of asking
    #[arg(long, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Save the collected answers as JSON
    #[arg(long, value_name = "FILE")]
    save_answers: Option<PathBuf>,

    /// Print the README instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Overwrite an existing README without asking
    #[arg(long, short = 'f')]
    force: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cancelled) => {
            eprintln!("Cancelled, nothing was written");
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let cfg = config::Config::load();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output));

    // Override the wizard with an answers file if given
    let (request, overwrite) = if let Some(answers) = &args.answers {
        (DocumentRequest::load(answers)?, None)
    } else {
        let app = AppState::new(&cfg, output_path.clone())
            .with_skip_confirm(args.force || args.stdout);
        let app = run_tui(app)?;
        (app.request(), app.overwrite)
    };

    if let Some(save_path) = &args.save_answers {
        request.save(save_path)?;
    }

    let readme = markdown::generate_markdown(&request);

    if args.stdout {
        print!("{readme}");
        return Ok(());
    }

    // An answer given in the wizard wins over --force
    let outcome = if let Some(approved) = overwrite {
        let mut answered = |_: &Path| -> io::Result<bool> { Ok(approved) };
        output::write_readme(&output_path, &readme, &mut answered)?
    } else if args.force {
        output::write_readme(&output_path, &readme, &mut AlwaysOverwrite)?
    } else {
        output::write_readme(&output_path, &readme, &mut PromptConfirm::stdio())?
    };

    match outcome {
        WriteOutcome::Written => println!("Successfully created {}", output_path.display()),
        WriteOutcome::Declined => println!("Kept existing {}", output_path.display()),
    }
    Ok(())
}

fn run_tui(mut app: AppState) -> Result<AppState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor_handler = EditorEventHandler::default();

    let result = run_app(&mut terminal, &mut app, &mut editor_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        Flow::Continue if app.is_done() => Ok(app),
        _ => Err(Error::Cancelled),
    }
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    editor_handler: &mut EditorEventHandler,
) -> io::Result<Flow> {
    loop {
        if app.is_done() {
            return Ok(Flow::Continue);
        }

        terminal.draw(|f| readmegen::ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            View::Title | View::Username | View::Email => match key.code {
                KeyCode::Char(c) => {
                    if let Some(buffer) = app.input_buffer_mut() {
                        buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = app.input_buffer_mut() {
                        buffer.pop();
                    }
                }
                KeyCode::Enter => match app.current_view {
                    View::Title => {
                        app.submit_title();
                    }
                    View::Username => app.submit_username(),
                    _ => app.submit_email(),
                },
                KeyCode::Esc => {
                    if app.current_view == View::Title {
                        return Ok(Flow::Quit);
                    }
                    app.go_back();
                }
                _ => {}
            },
            View::Sections => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.choice_up(),
                KeyCode::Down | KeyCode::Char('j') => app.choice_down(),
                KeyCode::Char(' ') => app.toggle_choice(),
                KeyCode::Enter => app.confirm_sections(),
                KeyCode::Esc => app.go_back(),
                KeyCode::Char('q') => return Ok(Flow::Quit),
                _ => {}
            },
            View::Detail => match key.code {
                KeyCode::Char(':') => {
                    if let Some(ref mut editor_state) = app.editor_state {
                        if editor_state.mode == edtui::EditorMode::Normal {
                            app.current_view = View::Command;
                            app.command_buffer.clear();
                            app.message = None;
                        } else {
                            editor_handler.on_key_event(key, editor_state);
                        }
                    }
                }
                KeyCode::Esc => {
                    if let Some(ref mut editor_state) = app.editor_state {
                        if editor_state.mode == edtui::EditorMode::Normal {
                            app.go_back();
                        } else {
                            editor_handler.on_key_event(key, editor_state);
                        }
                    }
                }
                _ => {
                    if let Some(ref mut editor_state) = app.editor_state {
                        editor_handler.on_key_event(key, editor_state);
                    }
                }
            },
            View::Command => match key.code {
                KeyCode::Char(c) => {
                    app.command_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.command_buffer.pop();
                }
                KeyCode::Enter => match app.execute_command() {
                    Flow::Quit => return Ok(Flow::Quit),
                    Flow::Continue => {}
                },
                KeyCode::Esc => {
                    app.current_view = View::Detail;
                    app.command_buffer.clear();
                }
                _ => {}
            },
            View::License => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.license_up(),
                KeyCode::Down | KeyCode::Char('j') => app.license_down(),
                KeyCode::Enter => app.submit_license(),
                KeyCode::Esc => app.go_back(),
                _ => {}
            },
            View::Confirm => match key.code {
                KeyCode::Char('y' | 'Y') => app.answer_overwrite(true),
                KeyCode::Char('n' | 'N') | KeyCode::Enter => app.answer_overwrite(false),
                KeyCode::Esc => app.go_back(),
                _ => {}
            },
            View::Done => return Ok(Flow::Continue),
        }
    }
}
