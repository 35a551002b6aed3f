//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. Drawing
//! is a pure projection of `App`; nothing here mutates player state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Section};
use crate::config::UiSettings;
use crate::library::{Track, display_from_fields};

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("tab", "switch list"),
    ("enter", "play selected"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("f", "favourite"),
    ("+/-", "volume"),
    ("i", "details"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Marker shown next to a track: playing, paused (current) or nothing.
fn playback_marker(app: &App, track: &Track) -> &'static str {
    if app.player.is_track_playing(track.id) {
        "▶ "
    } else if app.player.current() == Some(track.id) {
        "‖ "
    } else {
        "  "
    }
}

fn favorite_marker(app: &App, track: &Track) -> &'static str {
    if app.player.is_favorite(track.id) {
        "♥"
    } else {
        "♡"
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block.border_style(Style::default().add_modifier(Modifier::DIM))
    }
}

fn favorites_items<'a>(app: &'a App, indices: &[usize]) -> Vec<ListItem<'a>> {
    indices
        .iter()
        .filter_map(|&i| app.catalog.get(i))
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(playback_marker(app, t)),
                Span::raw("♥ ").bold(),
                Span::raw(t.title.as_str()).bold(),
                Span::raw(" — "),
                Span::raw(t.artist.as_str()).italic(),
            ]))
        })
        .collect()
}

fn recommendation_items<'a>(app: &'a App, indices: &[usize]) -> Vec<ListItem<'a>> {
    indices
        .iter()
        .filter_map(|&i| app.catalog.get(i))
        .map(|t| {
            let line = Line::from(vec![
                Span::raw(playback_marker(app, t)),
                Span::raw(t.title.as_str()).bold(),
                Span::raw(" — "),
                Span::raw(t.artist.as_str()).italic(),
                Span::raw("  "),
                Span::raw(t.duration.as_str()).dim(),
                Span::raw("  "),
                Span::raw(favorite_marker(app, t)),
            ]);
            let item = ListItem::new(line);
            if app.player.current() == Some(t.id) {
                item.style(Style::default().add_modifier(Modifier::UNDERLINED))
            } else {
                item
            }
        })
        .collect()
}

fn draw_section(frame: &mut Frame, app: &App, section: Section, area: Rect) {
    let indices = app.section_indices(section);
    let focused = app.focus == section;

    let (title, items) = match section {
        Section::Favorites => (" favourites ", favorites_items(app, &indices)),
        Section::Recommendations => (" recommendations ", recommendation_items(app, &indices)),
    };

    if items.is_empty() {
        let empty = Paragraph::new("No favourites yet. Press [f] on a track to add it.")
            .dim()
            .block(section_block(title, focused).padding(Padding::horizontal(1)));
        frame.render_widget(empty, area);
        return;
    }

    let mut list = List::new(items).block(section_block(title, focused));
    if focused {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
    }

    let mut state = ListState::default();
    state.select(Some(app.cursor(section)));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Player bar: current track, transport glyphs and the volume gauge.
fn draw_player_bar(frame: &mut Frame, app: &App, track: &Track, ui: &UiSettings, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(11),
            Constraint::Length(22),
        ])
        .split(inner);

    let song = display_from_fields(track, &ui.now_playing_fields, &ui.now_playing_separator);
    frame.render_widget(
        Paragraph::new(song)
            .bold()
            .block(Block::default().padding(Padding::left(1))),
        cols[0],
    );

    let play = if app.player.is_playing() { "⏸" } else { "▶" };
    let transport = Paragraph::new(format!("⏮  {play}  ⏭")).alignment(Alignment::Center);
    frame.render_widget(transport, cols[1]);

    let volume = app.player.volume();
    let gauge = Gauge::default()
        .label(format!("vol {volume}%"))
        .percent(u16::from(volume));
    frame.render_widget(gauge, cols[2]);
}

fn draw_details(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_sized(72, 9, area);
    frame.render_widget(Clear, popup_area);

    let text = match app.selected_track() {
        Some(t) => format!(
            "Title: {}\nArtist: {}\nDuration: {}\nCover: {}\nId: {}\nFavourite: {}",
            t.title,
            t.artist,
            t.duration,
            t.cover,
            t.id,
            if app.player.is_favorite(t.id) { "yes" } else { "no" },
        ),
        None => "No track selected".to_string(),
    };

    let details = Paragraph::new(text)
        .block(
            Block::default()
                .padding(Padding::left(1))
                .borders(Borders::ALL)
                .title(" details (i closes) "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, popup_area);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let now_playing = app.now_playing();
    let bar_height = if now_playing.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Length(bar_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(vec![
        Line::from(ui_settings.header_text.as_str()).bold(),
        Line::from(ui_settings.tagline.as_str()).dim(),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    draw_section(frame, app, Section::Favorites, chunks[1]);
    draw_section(frame, app, Section::Recommendations, chunks[2]);

    if let Some(track) = now_playing {
        draw_player_bar(frame, app, track, ui_settings, chunks[3]);
    }

    if app.details_window {
        draw_details(frame, app, chunks[2]);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
