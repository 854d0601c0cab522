use crate::{Card, CoreError};

pub mod memory;

/// Durable home for the deck.
///
/// `load` swallows absence and corruption: callers always get a deck,
/// possibly empty. `save` failures are surfaced so the session can log
/// them, but they must never abort a user interaction.
pub trait DeckStore: Send + Sync {
    fn load(&self) -> Vec<Card>;
    fn save(&self, deck: &[Card]) -> Result<(), CoreError>;
}
