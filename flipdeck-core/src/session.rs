use crate::{Card, CoreError, DeckStore, Progress};
use std::sync::Arc;
use tracing::warn;

pub const EMPTY_FRONT: &str = "Add your first card to start studying.";
pub const EMPTY_BACK: &str = "The answer will appear here when you flip the card.";

/// Snapshot of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub question: String,
    pub answer: String,
    /// 1-based "position / total" label, `"0 / 0"` for an empty deck.
    pub position: String,
    pub showing_front: bool,
}

/// Owns the deck, the per-card seen flags, the current position, and the
/// flip side. Every user input maps to exactly one method call here; the
/// renderer redraws from `current_view` and `progress` afterwards.
///
/// Invariants: `seen.len() == deck.len()` at all times, and
/// `current < deck.len()` whenever the deck is non-empty.
pub struct StudySession {
    store: Arc<dyn DeckStore>,
    deck: Vec<Card>,
    seen: Vec<bool>,
    current: usize,
    showing_front: bool,
}

impl StudySession {
    /// Loads the deck from the store and positions the session on the
    /// first card (marked seen, question side up) when one exists.
    pub fn open(store: Arc<dyn DeckStore>) -> Self {
        let mut session = Self {
            store,
            deck: Vec::new(),
            seen: Vec::new(),
            current: 0,
            showing_front: true,
        };
        session.initialize();
        session
    }

    /// (Re)loads from the store. Seen flags always restart all-false;
    /// they are session state and are never persisted.
    pub fn initialize(&mut self) {
        self.deck = self.store.load();
        self.seen = vec![false; self.deck.len()];
        self.current = 0;
        self.showing_front = true;
        if !self.deck.is_empty() {
            self.seen[0] = true;
        }
    }

    /// Appends one card. Both inputs are trimmed; an empty question or
    /// answer rejects the call without mutating anything. The deck is
    /// persisted on success, and the session navigates to the current
    /// card so the visible state matches navigation semantics.
    pub fn add_card(&mut self, question: &str, answer: &str) -> Result<(), CoreError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(CoreError::Invalid("question must not be empty"));
        }
        if answer.is_empty() {
            return Err(CoreError::Invalid("answer must not be empty"));
        }

        self.deck.push(Card::new(question, answer));
        self.seen.push(false);
        if let Err(e) = self.store.save(&self.deck) {
            // In-memory deck stays authoritative for the session.
            warn!("deck not persisted: {e}");
        }
        if self.deck.len() == 1 {
            self.current = 0;
        }
        self.go_to(self.current);
        Ok(())
    }

    /// Moves to `index`, clamped into range. Out-of-range requests are
    /// clamped, never rejected. Landing on a card marks it seen and
    /// always shows the question side.
    pub fn go_to(&mut self, index: usize) {
        if self.deck.is_empty() {
            return;
        }
        self.current = index.min(self.deck.len() - 1);
        self.seen[self.current] = true;
        self.showing_front = true;
    }

    /// Advances one card, wrapping to the first past the end.
    pub fn next(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        let next = if self.current + 1 >= self.deck.len() {
            0
        } else {
            self.current + 1
        };
        self.go_to(next);
    }

    /// Steps back one card, wrapping to the last before the start.
    pub fn previous(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        let prev = if self.current == 0 {
            self.deck.len() - 1
        } else {
            self.current - 1
        };
        self.go_to(prev);
    }

    /// Toggles which side is visible. The only operation that does not
    /// reset to the question side; never touches seen flags or position.
    pub fn flip(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.showing_front = !self.showing_front;
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.seen)
    }

    pub fn current_view(&self) -> CardView {
        match self.deck.get(self.current) {
            Some(card) => CardView {
                question: card.question.clone(),
                answer: card.answer.clone(),
                position: format!("{} / {}", self.current + 1, self.deck.len()),
                showing_front: self.showing_front,
            },
            None => CardView {
                question: EMPTY_FRONT.to_string(),
                answer: EMPTY_BACK.to_string(),
                position: "0 / 0".to_string(),
                showing_front: true,
            },
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    pub fn seen(&self) -> &[bool] {
        &self.seen
    }

    /// `None` when the deck is empty; the position is meaningless then.
    pub fn current_index(&self) -> Option<usize> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn showing_front(&self) -> bool {
        self.showing_front
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }
}
