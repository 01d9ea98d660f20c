use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config::Settings;
use crate::error::Result;
use crate::runtime::keymap::{Command, PromptCommand, command_for, prompt_command_for};
use crate::runtime::startup::load_folder;
use crate::transport::DeckEvent;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// First key of a pending two-key sequence (`gg`, `zz`).
    pub pending: Option<char>,
}

/// Main terminal event loop: advances playback, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<()> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        let now = Instant::now();
        if let Some(DeckEvent::Finished(index)) = app.tick(now) {
            debug!("track {index} finished");
        }
        app.sync_selection();

        terminal.draw(|f| ui::draw(f, app, settings, now))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, state, Instant::now()) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Route one key press; returns true when the player should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    state: &mut EventLoopState,
    now: Instant,
) -> bool {
    if app.prompt.is_some() {
        state.pending = None;
        if let Some(cmd) = prompt_command_for(key) {
            handle_prompt_command(cmd, settings, app);
        }
        return false;
    }

    match command_for(key, &mut state.pending) {
        Some(cmd) => dispatch(cmd, settings, app, now),
        None => false,
    }
}

fn handle_prompt_command(cmd: PromptCommand, settings: &Settings, app: &mut App) {
    match cmd {
        PromptCommand::Insert(c) => app.push_prompt_char(c),
        PromptCommand::Backspace => app.pop_prompt_char(),
        PromptCommand::Cancel => app.cancel_prompt(),
        PromptCommand::Submit => {
            if let Some(dir) = app.take_prompt() {
                load_folder(app, &dir, &settings.library);
            }
        }
    }
}

/// Apply `cmd` to `app`; returns true for `Quit`.
fn dispatch(cmd: Command, settings: &Settings, app: &mut App, now: Instant) -> bool {
    let scrub = i64::try_from(settings.transport.scrub_seconds).unwrap_or(i64::MAX);
    let step = settings.transport.volume_step;

    match cmd {
        Command::Quit => return true,
        Command::PlayPause => app.play_pause(now),
        Command::Next => app.next(now),
        Command::Prev => app.prev(now),
        Command::SelectNext => app.select_next(),
        Command::SelectPrev => app.select_prev(),
        Command::SelectFirst => app.select_first(),
        Command::SelectLast => app.select_last(),
        Command::SelectCurrent => app.select_current(),
        Command::PlaySelected => app.play_selected(now),
        Command::SeekForward => app.seek_by(scrub, now),
        Command::SeekBackward => app.seek_by(-scrub, now),
        Command::VolumeUp => app.adjust_volume(step),
        Command::VolumeDown => app.adjust_volume(-step),
        Command::ToggleShuffle => app.toggle_shuffle(),
        Command::CycleRepeat => {
            app.cycle_repeat();
        }
        Command::ToggleMetadata => app.toggle_metadata_window(),
        Command::OpenFolder => app.begin_open_prompt(),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::{Playlist, RepeatMode, Track};
    use crate::transport::Deck;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn app_with(n: usize) -> App {
        let mut app = App::new(Playlist::seeded(2), Deck::new(0.5));
        let tracks = (0..n)
            .map(|i| {
                Track::new(format!("/m/{i}.mp3"), format!("T{i}"))
                    .with_duration(Duration::from_secs(90))
            })
            .collect();
        app.open_folder(Path::new("/m"), tracks);
        app
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn dispatch_quit_and_transport() {
        let settings = Settings::default();
        let now = Instant::now();
        let mut app = app_with(3);

        assert!(!dispatch(Command::PlayPause, &settings, &mut app, now));
        assert!(app.deck.is_playing());
        dispatch(Command::SeekForward, &settings, &mut app, now);
        assert_eq!(app.deck.position(now), Duration::from_secs(5));
        dispatch(Command::SeekBackward, &settings, &mut app, now);
        assert_eq!(app.deck.position(now), Duration::ZERO);
        dispatch(Command::Next, &settings, &mut app, now);
        assert_eq!(app.now_playing().map(|(_, t)| t.title.as_str()), Some("T1"));
        dispatch(Command::CycleRepeat, &settings, &mut app, now);
        assert_eq!(app.playlist.repeat_mode(), RepeatMode::One);
        assert!(dispatch(Command::Quit, &settings, &mut app, now));
    }

    #[test]
    fn dispatch_volume_uses_configured_step() {
        let mut settings = Settings::default();
        settings.transport.volume_step = 0.25;
        let mut app = app_with(1);
        dispatch(Command::VolumeDown, &settings, &mut app, Instant::now());
        assert_eq!(app.deck.volume(), 0.25);
    }

    #[test]
    fn keys_route_to_prompt_while_open() {
        let settings = Settings::default();
        let now = Instant::now();
        let mut state = EventLoopState::default();
        let mut app = app_with(2);

        handle_key_event(press('o'), &settings, &mut app, &mut state, now);
        assert_eq!(app.prompt.as_deref(), Some("/m"));

        // `q` is text inside the prompt, not quit.
        assert!(!handle_key_event(press('q'), &settings, &mut app, &mut state, now));
        assert_eq!(app.prompt.as_deref(), Some("/mq"));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        handle_key_event(esc, &settings, &mut app, &mut state, now);
        assert!(app.prompt.is_none());
        assert!(handle_key_event(press('q'), &settings, &mut app, &mut state, now));
    }

    #[test]
    fn submitting_prompt_opens_folder() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.ogg"), b"x").unwrap();
        let settings = Settings::default();
        let now = Instant::now();
        let mut state = EventLoopState::default();
        let mut app = app_with(3);

        app.prompt = Some(dir.path().display().to_string());
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        handle_key_event(enter, &settings, &mut app, &mut state, now);

        assert!(app.prompt.is_none());
        assert_eq!(app.playlist.len(), 1);
        assert_eq!(app.current_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn double_g_jumps_to_first_row() {
        let settings = Settings::default();
        let now = Instant::now();
        let mut state = EventLoopState::default();
        let mut app = app_with(4);
        app.select_last();

        handle_key_event(press('g'), &settings, &mut app, &mut state, now);
        assert_eq!(app.selected.get(), 3);
        handle_key_event(press('g'), &settings, &mut app, &mut state, now);
        assert_eq!(app.selected.get(), 0);
    }
}
