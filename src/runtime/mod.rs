use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cli::Cli;
use crate::error::Result;

mod event_loop;
pub mod keymap;
mod settings;
mod startup;

pub use settings::load_settings;

/// Run the player until the user quits.
pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli);

    let dir = match cli.dir {
        Some(dir) => dir,
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut app = startup::build_app(&settings);
    startup::apply_playback_defaults(&mut app, &settings);
    startup::load_folder(&mut app, &dir, &settings.library);
    info!(
        "starting with {} tracks, shuffle {}, repeat {}",
        app.playlist.len(),
        app.playlist.shuffle_enabled(),
        app.playlist.repeat_mode()
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::default();
    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
