//! Local deck source backed by a deterministic shuffle.

use crate::core::{Card, DeckRng, Suit};
use crate::error::GameError;

use super::{DeckSource, DECK_SIZE};

/// Face-value tokens in ascending rank order.
const TOKENS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "JACK", "QUEEN", "KING", "ACE",
];

/// A local source that shuffles a standard 52-card deck with a seeded
/// RNG. Same seed, same deal.
#[derive(Clone, Debug)]
pub struct ShuffledSource {
    rng: DeckRng,
}

impl ShuffledSource {
    /// Create a source with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeckRng::new(seed),
        }
    }
}

impl DeckSource for ShuffledSource {
    fn draw(&mut self) -> Result<Vec<Card>, GameError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for token in TOKENS {
                cards.push(Card::standard(token, suit)?);
            }
        }
        self.rng.shuffle(&mut cards);
        Ok(cards)
    }
}
