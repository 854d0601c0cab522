use crate::{Card, CoreError};
use parking_lot::RwLock;

/// In-memory store for tests and `--no-save` runs.
#[derive(Default)]
pub struct MemoryStore {
    cards: RwLock<Vec<Card>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }
}

impl crate::store::DeckStore for MemoryStore {
    fn load(&self) -> Vec<Card> {
        self.cards.read().clone()
    }

    fn save(&self, deck: &[Card]) -> Result<(), CoreError> {
        *self.cards.write() = deck.to_vec();
        Ok(())
    }
}
