use serde::{Deserialize, Serialize};

/// One question/answer pair. Immutable once added to the deck.
///
/// The serde layout doubles as the persisted layout: a bare object with
/// exactly these two text fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
