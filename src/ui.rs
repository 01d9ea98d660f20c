//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Instant};

use crate::app::App;
use crate::config::{Settings, UiSettings};
use crate::format::clock;
use crate::library::display_from_fields;
use crate::transport::DeckState;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "select");
    map.insert("gg/G", "top/bottom");
    map.insert("zz", "jump to current");
    map.insert("enter", "play selected");
    map.insert("space", "play/pause");
    map.insert("n/p", "next/prev");
    // ←/→ is filled dynamically from config.
    map.insert("+/-", "volume");
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("o", "open folder");
    map.insert("K", "metadata");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space", "n/p", "←/→", "+/-", "j/k", "enter", "gg/G", "zz", "s", "r", "o", "K", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "←/→" {
                Some(format!("[←/→] seek -/+{scrub_seconds}s"))
            } else {
                CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn deck_state_text(state: DeckState) -> &'static str {
    match state {
        DeckState::Playing => "Playing",
        DeckState::Paused => "Paused",
        DeckState::Stopped => "Stopped",
    }
}

/// Compose the status box lines.
fn status_text(app: &App, ui: &UiSettings, now: Instant) -> String {
    let mut parts: Vec<String> = Vec::new();

    match app.now_playing() {
        Some((_, track)) => {
            let song = display_from_fields(track, &ui.now_playing_fields, &ui.now_playing_separator);
            let time = format!(
                "{} / {}",
                clock(Some(app.deck.position(now))),
                clock(app.deck.duration())
            );
            parts.push(format!("Song: {song} [{time}]"));
            parts.push(deck_state_text(app.deck.state()).to_string());
        }
        None => parts.push("Stopped".to_string()),
    }

    parts.push(format!(
        "Shuffle: {}",
        if app.playlist.shuffle_enabled() { "On" } else { "Off" }
    ));
    parts.push(format!("Repeat: {}", app.playlist.repeat_mode()));
    parts.push(format!("Volume: {:.0}%", app.deck.volume() * 100.0));
    parts.push(
        if app.follow_playback {
            "Cursor: Follow"
        } else {
            "Cursor: Free-roam"
        }
        .to_string(),
    );
    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir.display()));
    }

    format!("{}\n{}", parts.join(" • "), app.status)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Visible window `[start, end)` of `total` rows that keeps `selected` centered.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn padded_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, settings: &Settings, now: Instant) {
    let ui_settings = &settings.ui;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadence ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = Paragraph::new(status_text(app, ui_settings, now))
        .block(padded_block(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Playlist rows in traversal order
    {
        let total = app.playlist.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let selected = app.selected.get().min(total.saturating_sub(1));
        let (start, end) = visible_window(total, list_height, selected);
        let playing = app.now_playing().map(|(i, _)| i);

        let items: Vec<ListItem> = app
            .playlist
            .iter_order()
            .skip(start)
            .take(end - start)
            .map(|(_, index, track)| {
                let marker = if Some(index) == playing { "♪ " } else { "  " };
                let row = display_from_fields(track, &ui_settings.row_fields, &ui_settings.row_separator);
                ListItem::new(format!("{marker}{row}  ({})", clock(track.duration)))
            })
            .collect();

        let title = format!(" playlist ({}) ", total);
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(selected - start));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Progress
    let ratio = app.deck.progress(now).unwrap_or(0.0);
    let label = format!(
        "{} / {}",
        clock(app.now_playing().map(|_| app.deck.position(now))),
        clock(app.deck.duration())
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[3]);

    let footer = Paragraph::new(controls_text(settings.transport.scrub_seconds))
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    // Overlay metadata popup (keeps list visible under it)
    if app.metadata_window {
        let popup_area = centered_rect_sized(72, 9, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let meta = match app.selected_track() {
            Some(track) => format!(
                "Title: {}\nArtist: {}\nAlbum: {}\nDuration: {}\nPath: {}",
                track.title,
                track.artist.as_deref().unwrap_or("-"),
                track.album.as_deref().unwrap_or("-"),
                clock(track.duration),
                track.location.display()
            ),
            None => "No track selected".to_string(),
        };
        let meta_paragraph = Paragraph::new(meta)
            .block(padded_block(" metadata (K closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(meta_paragraph, popup_area);
    }

    if let Some(input) = &app.prompt {
        let popup_area = centered_rect_sized(72, 3, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let prompt = Paragraph::new(format!("{input}_"))
            .block(padded_block(" open folder (enter loads, esc cancels) "));
        frame.render_widget(prompt, popup_area);
    }
}
