//! Typed error taxonomy for the engine.
//!
//! Only boundary failures live here: a deck source request that fails
//! or hands back malformed data. In-engine conditions (drawing from an
//! empty deck, playing while the gate is closed, selecting outside the
//! visible window) resolve locally to a neutral outcome and never
//! become errors.

use thiserror::Error;

/// Errors surfaced across the engine boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck source request failed or reported an unsuccessful draw.
    #[error("deck source draw failed: {reason}")]
    SourceFetch { reason: String },

    /// The deck source returned the wrong number of cards.
    #[error("deck source returned {count} cards, expected {expected}")]
    IncompleteDeck { count: usize, expected: usize },

    /// Two cards in a drawn deck share the same code.
    #[error("duplicate card code in drawn deck: {code}")]
    DuplicateCard { code: String },

    /// A face-value token outside the known set.
    #[error("unrecognized card value token: {token:?}")]
    InvalidCardValue { token: String },

    /// A suit token outside the known set.
    #[error("unrecognized suit token: {token:?}")]
    InvalidSuit { token: String },
}
