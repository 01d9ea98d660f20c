//! Key bindings: translate crossterm key events into player commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions reachable from the keyboard outside the open-folder prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayPause,
    Next,
    Prev,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    SelectCurrent,
    PlaySelected,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    ToggleShuffle,
    CycleRepeat,
    ToggleMetadata,
    OpenFolder,
    Quit,
}

/// Keys while the open-folder prompt is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand {
    Insert(char),
    Backspace,
    Cancel,
    Submit,
}

/// Map `key` to a command.
///
/// `pending` holds the first key of a two-key sequence (`gg`, `zz`); any other
/// key clears it.
pub fn command_for(key: KeyEvent, pending: &mut Option<char>) -> Option<Command> {
    let prefix = pending.take();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Char(c @ ('g' | 'z')) => {
            if prefix != Some(c) {
                *pending = Some(c);
                return None;
            }
            if c == 'g' {
                Command::SelectFirst
            } else {
                Command::SelectCurrent
            }
        }
        KeyCode::Char(' ') => Command::PlayPause,
        KeyCode::Char('n') | KeyCode::Char('l') => Command::Next,
        KeyCode::Char('p') | KeyCode::Char('h') => Command::Prev,
        KeyCode::Char('j') | KeyCode::Down => Command::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Command::SelectPrev,
        KeyCode::Char('G') => Command::SelectLast,
        KeyCode::Enter => Command::PlaySelected,
        KeyCode::Char('L') | KeyCode::Right => Command::SeekForward,
        KeyCode::Char('H') | KeyCode::Left => Command::SeekBackward,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::VolumeUp,
        KeyCode::Char('-') => Command::VolumeDown,
        KeyCode::Char('s') => Command::ToggleShuffle,
        KeyCode::Char('r') => Command::CycleRepeat,
        KeyCode::Char('K') => Command::ToggleMetadata,
        KeyCode::Char('o') => Command::OpenFolder,
        KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Map `key` while the open-folder prompt is active.
pub fn prompt_command_for(key: KeyEvent) -> Option<PromptCommand> {
    match key.code {
        KeyCode::Enter => Some(PromptCommand::Submit),
        KeyCode::Esc => Some(PromptCommand::Cancel),
        KeyCode::Backspace => Some(PromptCommand::Backspace),
        KeyCode::Char(c) if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PromptCommand::Insert(c))
        }
        _ => None,
    }
}
