use flipdeck_core::{store::memory::MemoryStore, Card, CoreError, DeckStore, StudySession};
use std::sync::Arc;

fn session_with(cards: &[(&str, &str)]) -> StudySession {
    let cards = cards.iter().map(|(q, a)| Card::new(*q, *a)).collect();
    StudySession::open(Arc::new(MemoryStore::with_cards(cards)))
}

#[test]
fn empty_deck_view_and_progress() {
    let s = session_with(&[]);

    let p = s.progress();
    assert_eq!((p.seen_count, p.total, p.percent), (0, 0, 0));

    let v = s.current_view();
    assert_eq!(v.position, "0 / 0");
    assert!(v.showing_front);
    assert_eq!(s.current_index(), None);
}

#[test]
fn initialize_marks_first_card_seen() {
    let s = session_with(&[("hola", "hello"), ("adios", "goodbye")]);
    assert_eq!(s.current_index(), Some(0));
    assert_eq!(s.seen(), &[true, false]);
    assert!(s.showing_front());
}

#[test]
fn first_add_positions_and_marks_seen() {
    let store = Arc::new(MemoryStore::new());
    let mut s = StudySession::open(store.clone());

    s.add_card("2+2", "4").unwrap();

    assert_eq!(s.len(), 1);
    assert_eq!(s.current_index(), Some(0));
    assert_eq!(s.seen(), &[true]);
    let p = s.progress();
    assert_eq!((p.seen_count, p.total, p.percent), (1, 1, 100));
    assert_eq!(store.load(), vec![Card::new("2+2", "4")]);
}

#[test]
fn add_trims_inputs() {
    let mut s = session_with(&[]);
    s.add_card("  hola ", " hello\n").unwrap();
    assert_eq!(s.cards()[0], Card::new("hola", "hello"));
}

#[test]
fn rejects_blank_question_or_answer() {
    let mut s = session_with(&[("a", "1")]);
    let before = s.progress();

    assert!(matches!(s.add_card("", "x"), Err(CoreError::Invalid(_))));
    assert!(matches!(s.add_card("   ", "x"), Err(CoreError::Invalid(_))));
    assert!(matches!(s.add_card("x", "\t"), Err(CoreError::Invalid(_))));

    assert_eq!(s.len(), 1);
    assert_eq!(s.seen().len(), 1);
    assert_eq!(s.progress(), before);
}

#[test]
fn add_navigates_to_current_card() {
    let mut s = session_with(&[("a", "1"), ("b", "2")]);
    s.go_to(1);
    s.flip();

    s.add_card("c", "3").unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.current_index(), Some(1));
    assert!(s.showing_front());
    assert!(!s.seen()[2]);
}

#[test]
fn navigation_wraps_both_ways() {
    let mut s = session_with(&[("a", "1"), ("b", "2"), ("c", "3")]);

    s.previous();
    assert_eq!(s.current_index(), Some(2));

    s.next();
    assert_eq!(s.current_index(), Some(0));

    s.go_to(2);
    s.next();
    assert_eq!(s.current_index(), Some(0));
}

#[test]
fn previous_wraparound_marks_seen_and_shows_front() {
    let mut s = session_with(&[("a", "1"), ("b", "2"), ("c", "3")]);
    s.flip();
    assert!(!s.showing_front());

    s.previous();

    assert_eq!(s.current_index(), Some(2));
    assert!(s.seen()[2]);
    assert!(s.showing_front());
}

#[test]
fn flip_twice_restores_side() {
    let mut s = session_with(&[("a", "1")]);
    assert!(s.showing_front());
    s.flip();
    assert!(!s.showing_front());
    s.flip();
    assert!(s.showing_front());
}

#[test]
fn flip_only_touches_side() {
    let mut s = session_with(&[("a", "1"), ("b", "2")]);
    s.next();
    let seen_before = s.seen().to_vec();

    s.flip();

    assert_eq!(s.current_index(), Some(1));
    assert_eq!(s.seen(), seen_before.as_slice());
}

#[test]
fn flip_then_next_forces_front_on_wrapped_card() {
    let mut s = session_with(&[("a", "1"), ("b", "2")]);
    s.go_to(1);
    s.flip();
    assert!(!s.showing_front());

    s.next();

    assert_eq!(s.current_index(), Some(0));
    assert!(s.showing_front());
}

#[test]
fn goto_clamps_out_of_range() {
    let mut s = session_with(&[("a", "1"), ("b", "2")]);
    s.go_to(99);
    assert_eq!(s.current_index(), Some(1));
    assert!(s.seen()[1]);
}

#[test]
fn operations_on_empty_deck_are_noops() {
    let mut s = session_with(&[]);
    s.next();
    s.previous();
    s.flip();
    s.go_to(5);
    assert_eq!(s.current_index(), None);
    assert!(s.showing_front());
    assert_eq!(s.progress().total, 0);
}

#[test]
fn seen_count_never_decreases_over_navigation() {
    let mut s = session_with(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    let mut last = s.progress().seen_count;
    for step in 0..12 {
        match step % 3 {
            0 => s.next(),
            1 => s.previous(),
            _ => s.go_to(step % 4),
        }
        let now = s.progress().seen_count;
        assert!(now >= last);
        assert_eq!(s.seen().len(), s.len());
        last = now;
    }
}

#[test]
fn current_view_tracks_side_and_position() {
    let mut s = session_with(&[("hola", "hello"), ("adios", "goodbye")]);

    let v = s.current_view();
    assert_eq!(v.question, "hola");
    assert_eq!(v.position, "1 / 2");
    assert!(v.showing_front);

    s.next();
    s.flip();
    let v = s.current_view();
    assert_eq!(v.answer, "goodbye");
    assert_eq!(v.position, "2 / 2");
    assert!(!v.showing_front);
}

#[test]
fn save_failure_keeps_session_authoritative() {
    struct FailingStore;
    impl DeckStore for FailingStore {
        fn load(&self) -> Vec<Card> {
            Vec::new()
        }
        fn save(&self, _deck: &[Card]) -> Result<(), CoreError> {
            Err(CoreError::Storage("disk full"))
        }
    }

    let mut s = StudySession::open(Arc::new(FailingStore));
    s.add_card("q", "a").unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.current_index(), Some(0));
}

#[test]
fn reinitialize_resets_seen_flags() {
    let store = Arc::new(MemoryStore::new());
    let mut s = StudySession::open(store);
    s.add_card("a", "1").unwrap();
    s.add_card("b", "2").unwrap();
    s.next();
    assert_eq!(s.progress().seen_count, 2);

    s.initialize();

    assert_eq!(s.len(), 2);
    assert_eq!(s.seen(), &[true, false]);
    assert_eq!(s.progress().seen_count, 1);
}
