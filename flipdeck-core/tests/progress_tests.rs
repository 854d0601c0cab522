use flipdeck_core::Progress;

#[test]
fn empty_is_all_zero() {
    let p = Progress::of(&[]);
    assert_eq!(
        p,
        Progress {
            seen_count: 0,
            total: 0,
            percent: 0
        }
    );
}

#[test]
fn percent_rounds_to_nearest() {
    assert_eq!(Progress::of(&[true, false, false]).percent, 33);
    assert_eq!(Progress::of(&[true, true, false]).percent, 67);
    assert_eq!(Progress::of(&[true, false]).percent, 50);
}

#[test]
fn all_seen_is_full() {
    let p = Progress::of(&[true; 4]);
    assert_eq!((p.seen_count, p.total, p.percent), (4, 4, 100));
}

#[test]
fn display_matches_progress_line() {
    let p = Progress::of(&[true, true, false]);
    assert_eq!(p.to_string(), "2 of 3 cards seen (67%)");
}
