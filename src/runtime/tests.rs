use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{handle_control_cmd, handle_key_event};
use super::startup::{build_app, load_catalog, seed_favorites};
use crate::app::Section;
use crate::config::{LibrarySettings, SectionSetting, Settings};
use crate::library::Catalog;
use crate::mpris::ControlCmd;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut crate::app::App, settings: &Settings, codes: &[KeyCode]) -> bool {
    let mut quit = false;
    for &c in codes {
        quit |= handle_key_event(key(c), settings, app);
    }
    quit
}

#[test]
fn build_app_uses_settings_defaults() {
    let settings = Settings::default();
    let app = build_app(&settings);
    assert_eq!(app.catalog.len(), 6);
    assert_eq!(app.focus, Section::Favorites);
    assert_eq!(app.player.volume(), 75);
    assert_eq!(app.player.favorites().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(app.player.current(), None);
    assert!(!app.player.is_playing());
}

#[test]
fn build_app_respects_start_section_and_volume() {
    let mut settings = Settings::default();
    settings.ui.start_section = SectionSetting::Recommendations;
    settings.player.initial_volume = 10;
    let app = build_app(&settings);
    assert_eq!(app.focus, Section::Recommendations);
    assert_eq!(app.player.volume(), 10);
}

#[test]
fn seed_favorites_drops_unknown_ids() {
    let catalog = Catalog::builtin();
    let favs = seed_favorites(&catalog, &[3, 42, 1, 3]);
    assert_eq!(favs.into_iter().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn load_catalog_falls_back_to_builtin_on_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("catalog.toml");
    std::fs::write(&bad, "tracks = 3").unwrap();

    let settings = LibrarySettings {
        catalog_path: Some(bad),
    };
    assert_eq!(load_catalog(&settings).len(), 6);

    let good = dir.path().join("good.toml");
    std::fs::write(
        &good,
        r#"
[[tracks]]
id = 10
title = "Only"
artist = "One"
duration = "1:23"
cover = ""
"#,
    )
    .unwrap();
    let settings = LibrarySettings {
        catalog_path: Some(good),
    };
    let catalog = load_catalog(&settings);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().id, 10);
}

#[test]
fn keys_drive_the_player() {
    let settings = Settings::default();
    let mut app = build_app(&settings);

    // nothing current: play/pause and skip do nothing
    assert!(!press(&mut app, &settings, &[KeyCode::Char(' '), KeyCode::Char('l')]));
    assert_eq!(app.player.current(), None);
    assert!(!app.player.is_playing());

    // favourites list starts on "Midnight Dreams" (id 1)
    press(&mut app, &settings, &[KeyCode::Enter]);
    assert_eq!(app.player.current(), Some(1));
    assert!(app.player.is_playing());

    press(&mut app, &settings, &[KeyCode::Char('p')]);
    assert!(!app.player.is_playing());

    press(&mut app, &settings, &[KeyCode::Right]);
    assert_eq!(app.player.current(), Some(2));
    assert!(app.player.is_playing());

    press(&mut app, &settings, &[KeyCode::Char('h'), KeyCode::Char('h')]);
    assert_eq!(app.player.current(), Some(6));

    // switch list, move to "Electric Pulse" and favourite it
    press(&mut app, &settings, &[KeyCode::Tab, KeyCode::Down, KeyCode::Char('f')]);
    assert!(app.player.is_favorite(2));

    press(&mut app, &settings, &[KeyCode::Char('-'), KeyCode::Char('-')]);
    assert_eq!(app.player.volume(), 65);
    press(&mut app, &settings, &[KeyCode::Char('+')]);
    assert_eq!(app.player.volume(), 70);

    press(&mut app, &settings, &[KeyCode::Char('i')]);
    assert!(app.details_window);
    press(&mut app, &settings, &[KeyCode::Esc]);
    assert!(!app.details_window);

    assert!(press(&mut app, &settings, &[KeyCode::Char('q')]));
}

#[test]
fn control_commands_map_onto_transitions() {
    let settings = Settings::default();
    let mut app = build_app(&settings);

    // Play without a current track does not invent one
    assert!(!handle_control_cmd(ControlCmd::Play, &mut app));
    assert!(!handle_control_cmd(ControlCmd::PlayPause, &mut app));
    assert_eq!(app.player.current(), None);
    assert!(!app.player.is_playing());

    app.activate_selected();
    assert!(app.player.is_playing());

    // Play while playing is idempotent
    handle_control_cmd(ControlCmd::Play, &mut app);
    assert!(app.player.is_playing());

    handle_control_cmd(ControlCmd::Pause, &mut app);
    assert!(!app.player.is_playing());
    handle_control_cmd(ControlCmd::Stop, &mut app);
    assert!(!app.player.is_playing());
    assert_eq!(app.player.current(), Some(1));

    handle_control_cmd(ControlCmd::Play, &mut app);
    assert!(app.player.is_playing());
    handle_control_cmd(ControlCmd::PlayPause, &mut app);
    assert!(!app.player.is_playing());

    handle_control_cmd(ControlCmd::Prev, &mut app);
    assert_eq!(app.player.current(), Some(6));
    assert!(app.player.is_playing());
    handle_control_cmd(ControlCmd::Next, &mut app);
    assert_eq!(app.player.current(), Some(1));

    handle_control_cmd(ControlCmd::SetVolume(33), &mut app);
    assert_eq!(app.player.volume(), 33);

    assert!(handle_control_cmd(ControlCmd::Quit, &mut app));
}
