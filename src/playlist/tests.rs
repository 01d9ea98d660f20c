use super::*;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn fake_track(i: usize) -> Track {
    Track::new(format!("/tmp/t{i}.mp3"), format!("T{i}")).with_duration(Duration::from_secs(60))
}

fn fake_tracks(n: usize) -> Vec<Track> {
    (0..n).map(fake_track).collect()
}

fn title(t: Option<&Track>) -> Option<&str> {
    t.map(|t| t.title.as_str())
}

/// Deterministic "shuffle": reverse the order.
fn reversing() -> impl FnMut(&mut [TrackIndex]) {
    |order: &mut [TrackIndex]| order.reverse()
}

fn indices(order: &[TrackIndex]) -> Vec<usize> {
    order.iter().map(|i| i.get()).collect()
}

#[test]
fn new_playlist_is_empty_with_default_modes() {
    let pl = Playlist::new();
    assert!(pl.is_empty());
    assert!(!pl.shuffle_enabled());
    assert_eq!(pl.repeat_mode(), RepeatMode::Off);
    assert_eq!(pl.cursor(), None);
    assert!(pl.current().is_none());
}

#[test]
fn load_without_shuffle_uses_identity_order() {
    let mut pl = Playlist::seeded(7);
    pl.load(fake_tracks(4));
    assert_eq!(indices(pl.order()), vec![0, 1, 2, 3]);
    assert_eq!(pl.cursor(), Some(OrderPosition::new(0)));
}

#[test]
fn basic_navigation_stops_at_end_with_repeat_off() {
    let mut pl = Playlist::seeded(1);
    pl.load(fake_tracks(3));

    assert_eq!(title(pl.current()), Some("T0"));
    assert_eq!(title(pl.next()), Some("T1"));
    assert_eq!(title(pl.next()), Some("T2"));
    assert_eq!(title(pl.next()), None);
    // cursor stays on the last row
    assert_eq!(pl.cursor(), Some(OrderPosition::new(2)));
    assert_eq!(title(pl.current()), Some("T2"));
}

#[test]
fn prev_stops_at_start_with_repeat_off() {
    let mut pl = Playlist::seeded(1);
    pl.load(fake_tracks(3));

    assert_eq!(title(pl.prev()), None);
    assert_eq!(pl.cursor(), Some(OrderPosition::new(0)));

    pl.next();
    pl.next();
    assert_eq!(title(pl.prev()), Some("T1"));
    assert_eq!(title(pl.prev()), Some("T0"));
    assert_eq!(title(pl.prev()), None);
}

#[test]
fn repeat_all_wraps_both_directions() {
    let mut pl = Playlist::seeded(1);
    pl.set_repeat_mode(RepeatMode::All);
    pl.load(fake_tracks(2));

    assert_eq!(title(pl.current()), Some("T0"));
    assert_eq!(title(pl.next()), Some("T1"));
    assert_eq!(title(pl.next()), Some("T0"));
    assert_eq!(title(pl.prev()), Some("T1"));
}

#[test]
fn repeat_one_pins_current_track() {
    let mut pl = Playlist::seeded(1);
    pl.load(fake_tracks(3));
    pl.next();
    pl.set_repeat_mode(RepeatMode::One);

    for _ in 0..5 {
        assert_eq!(title(pl.next()), Some("T1"));
        assert_eq!(title(pl.prev()), Some("T1"));
    }
    assert_eq!(pl.cursor(), Some(OrderPosition::new(1)));
}

#[test]
fn repeat_one_on_single_track_keeps_returning_it() {
    let mut pl = Playlist::seeded(1);
    pl.set_repeat_mode(RepeatMode::One);
    pl.load(fake_tracks(1));
    assert_eq!(title(pl.next()), Some("T0"));
    assert_eq!(title(pl.prev()), Some("T0"));
}

#[test]
fn shuffle_toggle_keeps_current() {
    let mut pl = Playlist::seeded(42);
    pl.load(fake_tracks(5));
    pl.next();
    pl.next();
    let current = pl.current().map(|t| t.location.clone());
    assert_eq!(current, Some(PathBuf::from("/tmp/t2.mp3")));

    pl.toggle_shuffle();
    assert!(pl.shuffle_enabled());
    assert_eq!(pl.current().map(|t| t.location.clone()), current);

    pl.toggle_shuffle();
    assert!(!pl.shuffle_enabled());
    assert_eq!(indices(pl.order()), vec![0, 1, 2, 3, 4]);
    assert_eq!(pl.current().map(|t| t.location.clone()), current);
    assert_eq!(pl.cursor(), Some(OrderPosition::new(2)));
}

#[test]
fn shuffle_toggle_relocates_cursor_in_injected_order() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.load(fake_tracks(5));
    pl.next(); // T1

    pl.toggle_shuffle();
    assert_eq!(indices(pl.order()), vec![4, 3, 2, 1, 0]);
    assert_eq!(pl.cursor(), Some(OrderPosition::new(3)));
    assert_eq!(title(pl.current()), Some("T1"));
    // only the future changes
    assert_eq!(title(pl.next()), Some("T0"));
    assert_eq!(title(pl.next()), None);
}

#[test]
fn shuffle_toggle_on_empty_playlist_only_flips_flag() {
    let mut pl = Playlist::seeded(3);
    pl.toggle_shuffle();
    assert!(pl.shuffle_enabled());
    assert!(pl.order().is_empty());
    assert!(pl.current().is_none());
}

#[test]
fn set_shuffle_is_noop_for_same_value() {
    let mut calls = 0;
    let mut pl = Playlist::with_shuffler(|order: &mut [TrackIndex]| {
        calls += 1;
        order.reverse();
    });
    pl.load(fake_tracks(3));
    pl.set_shuffle(false);
    pl.set_shuffle(true);
    pl.set_shuffle(true);
    assert!(pl.shuffle_enabled());
    assert_eq!(indices(pl.order()), vec![2, 1, 0]);
    drop(pl);
    assert_eq!(calls, 1);
}

#[test]
fn non_permutation_from_shuffle_source_falls_back_to_identity() {
    let mut pl = Playlist::with_shuffler(|order: &mut [TrackIndex]| {
        for slot in order.iter_mut() {
            *slot = TrackIndex::new(0);
        }
    });
    pl.load(fake_tracks(3));
    pl.toggle_shuffle();
    assert_eq!(indices(pl.order()), vec![0, 1, 2]);
}

#[test]
fn repeat_cycle_visits_all_modes() {
    let mut pl = Playlist::new();
    assert_eq!(pl.cycle_repeat_mode(), RepeatMode::One);
    assert_eq!(pl.cycle_repeat_mode(), RepeatMode::All);
    assert_eq!(pl.cycle_repeat_mode(), RepeatMode::Off);
    assert_eq!(pl.cycle_repeat_mode(), RepeatMode::One);
}

#[test]
fn repeat_cycle_does_not_touch_order_or_cursor() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.toggle_shuffle();
    pl.load(fake_tracks(4));
    pl.next();
    let order = pl.order().to_vec();
    let cursor = pl.cursor();
    for _ in 0..3 {
        pl.cycle_repeat_mode();
        assert_eq!(pl.order(), order.as_slice());
        assert_eq!(pl.cursor(), cursor);
    }
}

#[test]
fn empty_playlist_navigation_is_inert() {
    let mut pl = Playlist::seeded(9);
    pl.set_repeat_mode(RepeatMode::All);

    assert!(pl.current().is_none());
    assert!(pl.next().is_none());
    assert!(pl.prev().is_none());
    assert!(pl.cursor().is_none());
    assert!(pl.order().is_empty());
    assert_eq!(pl.repeat_mode(), RepeatMode::All);
    assert!(!pl.shuffle_enabled());
}

#[test]
fn reload_resets_cursor_and_keeps_modes() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.load(fake_tracks(5));
    pl.next();
    pl.next();
    pl.toggle_shuffle();
    pl.cycle_repeat_mode();
    pl.cycle_repeat_mode();

    pl.load(fake_tracks(3));
    assert_eq!(pl.cursor(), Some(OrderPosition::new(0)));
    assert!(pl.shuffle_enabled());
    assert_eq!(pl.repeat_mode(), RepeatMode::All);
    assert_eq!(indices(pl.order()), vec![2, 1, 0]);
    assert_eq!(title(pl.current()), Some("T2"));
}

#[test]
fn reload_with_empty_list_clears_current() {
    let mut pl = Playlist::seeded(2);
    pl.load(fake_tracks(3));
    pl.next();
    pl.load(Vec::new());
    assert!(pl.current().is_none());
    assert!(pl.cursor().is_none());
}

#[test]
fn locate_by_identity_finds_load_index() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.toggle_shuffle();
    pl.load(fake_tracks(4));

    assert_eq!(
        pl.locate_by_identity(Path::new("/tmp/t1.mp3")),
        Some(TrackIndex::new(1))
    );
    assert_eq!(pl.locate_by_identity(Path::new("/tmp/missing.mp3")), None);
}

#[test]
fn set_cursor_by_track_index_translates_to_order_position() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.toggle_shuffle();
    pl.load(fake_tracks(4));

    assert_eq!(
        pl.set_cursor_by_track_index(TrackIndex::new(1)),
        Some(OrderPosition::new(2))
    );
    assert_eq!(title(pl.current()), Some("T1"));

    assert_eq!(pl.set_cursor_by_track_index(TrackIndex::new(99)), None);
    assert_eq!(pl.cursor(), Some(OrderPosition::new(2)));
}

#[test]
fn set_cursor_and_entry_at_use_order_positions() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.toggle_shuffle();
    pl.load(fake_tracks(3));

    let (index, track) = pl.entry_at(OrderPosition::new(0)).unwrap();
    assert_eq!(index, TrackIndex::new(2));
    assert_eq!(track.title, "T2");

    assert_eq!(title(pl.set_cursor(OrderPosition::new(1))), Some("T1"));
    assert!(pl.set_cursor(OrderPosition::new(3)).is_none());
    assert_eq!(pl.cursor(), Some(OrderPosition::new(1)));
    assert!(pl.entry_at(OrderPosition::new(3)).is_none());
}

#[test]
fn iter_order_yields_rows_in_traversal_order() {
    let mut pl = Playlist::with_shuffler(reversing());
    pl.toggle_shuffle();
    pl.load(fake_tracks(3));

    let rows: Vec<(usize, usize, String)> = pl
        .iter_order()
        .map(|(pos, idx, t)| (pos.get(), idx.get(), t.title.clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (0, 2, "T2".to_string()),
            (1, 1, "T1".to_string()),
            (2, 0, "T0".to_string()),
        ]
    );
}

#[test]
fn same_seed_gives_same_shuffled_order() {
    let mut a = Playlist::seeded(1234);
    let mut b = Playlist::seeded(1234);
    a.toggle_shuffle();
    b.toggle_shuffle();
    a.load(fake_tracks(20));
    b.load(fake_tracks(20));
    assert_eq!(a.order(), b.order());
}

#[test]
fn is_permutation_rejects_duplicates_and_out_of_range() {
    let ok = identity_order(3);
    assert!(is_permutation(&ok, 3));
    assert!(!is_permutation(&ok, 4));
    let dup = vec![TrackIndex::new(0), TrackIndex::new(0), TrackIndex::new(2)];
    assert!(!is_permutation(&dup, 3));
    let oob = vec![TrackIndex::new(0), TrackIndex::new(1), TrackIndex::new(3)];
    assert!(!is_permutation(&oob, 3));
}

#[test]
fn repeat_mode_successor_and_labels() {
    assert_eq!(RepeatMode::default(), RepeatMode::Off);
    assert_eq!(RepeatMode::Off.successor(), RepeatMode::One);
    assert_eq!(RepeatMode::One.successor(), RepeatMode::All);
    assert_eq!(RepeatMode::All.successor(), RepeatMode::Off);
    assert_eq!(RepeatMode::All.to_string(), "All");
}

proptest! {
    /// The order is a permutation of the load, shuffled or not.
    #[test]
    fn order_is_always_a_permutation(n in 0usize..64, seed in any::<u64>(), shuffle in any::<bool>()) {
        let mut pl = Playlist::seeded(seed);
        pl.set_shuffle(shuffle);
        pl.load(fake_tracks(n));
        prop_assert!(is_permutation(pl.order(), n));

        pl.toggle_shuffle();
        prop_assert!(is_permutation(pl.order(), n));
    }

    /// Any sequence of operations keeps the cursor in range and the current
    /// track stable across shuffle toggles.
    #[test]
    fn operations_keep_cursor_in_range(
        n in 0usize..16,
        seed in any::<u64>(),
        ops in prop::collection::vec(0u8..5, 0..64),
    ) {
        let mut pl = Playlist::seeded(seed);
        pl.load(fake_tracks(n));

        for op in ops {
            match op {
                0 => { pl.next(); }
                1 => { pl.prev(); }
                2 => {
                    let before = pl.current().map(|t| t.location.clone());
                    pl.toggle_shuffle();
                    prop_assert_eq!(pl.current().map(|t| t.location.clone()), before);
                }
                3 => { pl.cycle_repeat_mode(); }
                _ => { pl.set_cursor(OrderPosition::new(n / 2)); }
            }
            match pl.cursor() {
                Some(c) => prop_assert!(c.get() < n),
                None => prop_assert_eq!(n, 0),
            }
            prop_assert!(is_permutation(pl.order(), n));
        }
    }
}
