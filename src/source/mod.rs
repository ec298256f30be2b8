//! The deck source: the collaborator that supplies fresh 52-card
//! sequences.
//!
//! The engine treats the source as a black box: shuffling guarantees
//! are the source's responsibility. What the engine *does* own is
//! validation: a draw is checked for success, completeness, and code
//! uniqueness before any card reaches the table, and the engine never
//! starts from a partial set.

pub mod payload;
mod shuffled;

pub use payload::{CardPayload, DrawResponse, ImagesPayload};
pub use shuffled::ShuffledSource;

use rustc_hash::FxHashSet;

use crate::core::Card;
use crate::error::GameError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Supplies an ordered sequence of 52 unique cards on demand.
pub trait DeckSource {
    /// Draw a fresh, validated 52-card sequence.
    fn draw(&mut self) -> Result<Vec<Card>, GameError>;
}

/// A parsed draw response acts as a one-shot source: callers fetch the
/// JSON themselves, parse it with [`DrawResponse::from_json`], and hand
/// it to the engine.
impl DeckSource for DrawResponse {
    fn draw(&mut self) -> Result<Vec<Card>, GameError> {
        validate_draw(self.clone())
    }
}

/// Validate a draw response and convert it into engine cards.
///
/// Rejects unsuccessful responses, short or oversized decks, duplicate
/// codes, and unknown value/suit tokens.
pub fn validate_draw(response: DrawResponse) -> Result<Vec<Card>, GameError> {
    if !response.success {
        return Err(GameError::SourceFetch {
            reason: format!("deck {} reported an unsuccessful draw", response.deck_id),
        });
    }

    if response.cards.len() != DECK_SIZE {
        return Err(GameError::IncompleteDeck {
            count: response.cards.len(),
            expected: DECK_SIZE,
        });
    }

    let mut seen = FxHashSet::default();
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for payload in response.cards {
        if !seen.insert(payload.code.clone()) {
            return Err(GameError::DuplicateCard { code: payload.code });
        }
        cards.push(Card::try_from(payload)?);
    }

    Ok(cards)
}
