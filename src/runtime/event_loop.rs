use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::SkipDirection;
use crate::runtime::mpris_sync::{MprisSnapshot, update_mpris};
use crate::ui;

/// Main terminal event loop: draws the UI, applies MPRIS commands and key
/// presses, and keeps MPRIS in sync. Returns `Ok(())` when shutdown is
/// requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> anyhow::Result<()> {
    let mut last_sent = MprisSnapshot::of(app);
    update_mpris(mpris, app);

    loop {
        let snapshot = MprisSnapshot::of(app);
        if snapshot != last_sent {
            update_mpris(mpris, app);
            last_sent = snapshot;
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a bus command. Returns `true` when the app should quit.
pub(super) fn handle_control_cmd(cmd: ControlCmd, app: &mut App) -> bool {
    log::debug!("control command: {cmd:?}");
    let has_current = app.player.current().is_some();
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::PlayPause => app.toggle_playback(),
        ControlCmd::Play => {
            if has_current && !app.player.is_playing() {
                app.toggle_playback();
            }
        }
        ControlCmd::Pause | ControlCmd::Stop => {
            if app.player.is_playing() {
                app.toggle_playback();
            }
        }
        ControlCmd::Next => app.skip(SkipDirection::Next),
        ControlCmd::Prev => app.skip(SkipDirection::Previous),
        ControlCmd::SetVolume(v) => app.player.set_volume(v),
    }
    false
}

/// Apply a key press. Returns `true` when the app should quit.
pub(super) fn handle_key_event(key: KeyEvent, settings: &config::Settings, app: &mut App) -> bool {
    let step = i16::from(settings.player.volume_step);

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.details_window = false,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_playback(),
        KeyCode::Char('l') | KeyCode::Right => app.skip(SkipDirection::Next),
        KeyCode::Char('h') | KeyCode::Left => app.skip(SkipDirection::Previous),
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.player.adjust_volume(step),
        KeyCode::Char('-') => app.player.adjust_volume(-step),
        KeyCode::Char('i') => app.toggle_details_window(),
        _ => {}
    }

    false
}
