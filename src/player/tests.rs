use super::*;
use crate::library::{Catalog, Track};

fn three() -> Catalog {
    Catalog::new(vec![
        Track::new(1, "T1", "A", "1:00", ""),
        Track::new(2, "T2", "B", "2:00", ""),
        Track::new(3, "T3", "C", "3:00", ""),
    ])
    .unwrap()
}

#[test]
fn new_state_is_idle_with_seeded_favorites() {
    let s = PlayerState::new([1, 3], DEFAULT_VOLUME);
    assert_eq!(s.current(), None);
    assert!(!s.is_playing());
    assert_eq!(s.favorites().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(s.volume(), 75);
}

#[test]
fn selecting_a_different_track_always_starts_playing() {
    let catalog = Catalog::builtin();
    for a in catalog.tracks() {
        for b in catalog.tracks() {
            if a.id == b.id {
                continue;
            }
            let mut s = PlayerState::default();
            s.select_or_toggle(Some(a.id));
            s.select_or_toggle(Some(b.id));
            assert_eq!(s.current(), Some(b.id));
            assert!(s.is_playing());
        }
    }
}

#[test]
fn switching_from_paused_track_starts_playing() {
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(1));
    s.select_or_toggle(None);
    assert!(!s.is_playing());

    s.select_or_toggle(Some(2));
    assert_eq!(s.current(), Some(2));
    assert!(s.is_playing());
}

#[test]
fn selecting_same_track_twice_pauses() {
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(4));
    s.select_or_toggle(Some(4));
    assert_eq!(s.current(), Some(4));
    assert!(!s.is_playing());

    s.select_or_toggle(Some(4));
    assert!(s.is_playing());
}

#[test]
fn toggle_without_track_flips_playing_on_current() {
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(2));
    s.select_or_toggle(None);
    assert_eq!(s.current(), Some(2));
    assert!(!s.is_playing());
    s.select_or_toggle(None);
    assert!(s.is_playing());
}

#[test]
fn toggle_without_track_or_current_is_a_no_op() {
    let mut s = PlayerState::default();
    let before = s.clone();
    s.select_or_toggle(None);
    assert_eq!(s, before);
    assert!(!s.is_playing());
}

#[test]
fn skip_without_current_is_a_no_op() {
    let catalog = three();
    let mut s = PlayerState::default();
    s.skip(SkipDirection::Next, &catalog);
    s.skip(SkipDirection::Previous, &catalog);
    assert_eq!(s.current(), None);
    assert!(!s.is_playing());
}

#[test]
fn skip_next_catalog_len_times_is_cyclic() {
    let catalog = Catalog::builtin();
    for start in catalog.tracks() {
        let mut s = PlayerState::default();
        s.select_or_toggle(Some(start.id));
        for _ in 0..catalog.len() {
            s.skip(SkipDirection::Next, &catalog);
        }
        assert_eq!(s.current(), Some(start.id));
    }
}

#[test]
fn skip_previous_undoes_skip_next() {
    let catalog = Catalog::builtin();
    for start in catalog.tracks() {
        let mut s = PlayerState::default();
        s.select_or_toggle(Some(start.id));
        s.skip(SkipDirection::Next, &catalog);
        s.skip(SkipDirection::Previous, &catalog);
        assert_eq!(s.current(), Some(start.id));
    }
}

#[test]
fn skip_resumes_playback_when_paused() {
    let catalog = three();
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(1));
    s.select_or_toggle(None);
    assert!(!s.is_playing());

    s.skip(SkipDirection::Next, &catalog);
    assert_eq!(s.current(), Some(2));
    assert!(s.is_playing());
}

#[test]
fn skip_scenario_wraps_both_ways() {
    let catalog = three();
    let mut s = PlayerState::default();

    s.skip(SkipDirection::Next, &catalog);
    assert_eq!(s.current(), None);

    s.select_or_toggle(Some(1));
    assert_eq!(s.current(), Some(1));
    assert!(s.is_playing());

    s.skip(SkipDirection::Next, &catalog);
    assert_eq!(s.current(), Some(2));
    assert!(s.is_playing());

    s.skip(SkipDirection::Previous, &catalog);
    s.skip(SkipDirection::Previous, &catalog);
    assert_eq!(s.current(), Some(3));
    assert!(s.is_playing());
}

#[test]
fn skip_from_unknown_track_is_a_no_op() {
    let catalog = three();
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(99));
    s.select_or_toggle(None);
    let before = s.clone();

    s.skip(SkipDirection::Next, &catalog);
    assert_eq!(s, before);
}

#[test]
fn toggle_favorite_is_an_involution() {
    let mut s = PlayerState::new([1, 3], DEFAULT_VOLUME);

    s.toggle_favorite(1);
    assert_eq!(s.favorites().iter().copied().collect::<Vec<_>>(), vec![3]);

    s.toggle_favorite(1);
    assert_eq!(s.favorites().iter().copied().collect::<Vec<_>>(), vec![1, 3]);

    let before = s.favorites().clone();
    s.toggle_favorite(5);
    s.toggle_favorite(5);
    assert_eq!(s.favorites(), &before);
}

#[test]
fn favorites_do_not_touch_playback() {
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(2));
    s.toggle_favorite(2);
    assert!(s.is_favorite(2));
    assert_eq!(s.current(), Some(2));
    assert!(s.is_playing());
}

#[test]
fn volume_is_clamped_and_independent() {
    let mut s = PlayerState::default();
    s.select_or_toggle(Some(1));

    s.set_volume(30);
    assert_eq!(s.volume(), 30);
    s.set_volume(250);
    assert_eq!(s.volume(), 100);

    s.adjust_volume(-15);
    assert_eq!(s.volume(), 85);
    s.adjust_volume(-200);
    assert_eq!(s.volume(), 0);
    s.adjust_volume(5);
    assert_eq!(s.volume(), 5);

    assert_eq!(s.current(), Some(1));
    assert!(s.is_playing());
}

#[test]
fn is_track_playing_requires_current_and_playing() {
    let mut s = PlayerState::default();
    assert!(!s.is_track_playing(1));
    s.select_or_toggle(Some(1));
    assert!(s.is_track_playing(1));
    assert!(!s.is_track_playing(2));
    s.select_or_toggle(None);
    assert!(!s.is_track_playing(1));
}
