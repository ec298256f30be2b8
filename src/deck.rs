//! Ordered per-side decks.
//!
//! The front of a deck (index 0) is the next card to play. Claimed
//! cards accumulate at the bottom, so winning cards recycle rather
//! than leave play. The one departure from strict FIFO is the
//! selection variant: `remove` pulls an identified card out of the
//! visible window while preserving the relative order of the rest.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardCode};

/// An ordered sequence of cards; index 0 is the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from front-to-bottom card order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the front card.
    ///
    /// An empty deck yields `None` ("no card played"), never a panic.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Append a claimed card at the bottom.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a claimed pile at the bottom, preserving its order.
    pub fn extend_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the identified card from wherever it sits, preserving the
    /// relative order of every other card.
    ///
    /// Returns `None` if the card is not in this deck.
    pub fn remove(&mut self, code: &CardCode) -> Option<Card> {
        let pos = self.cards.iter().position(|c| &c.code == code)?;
        Some(self.cards.remove(pos))
    }

    /// The first `n` cards (the selectable window), clamped to the
    /// deck size.
    #[must_use]
    pub fn visible(&self, n: usize) -> &[Card] {
        &self.cards[..n.min(self.cards.len())]
    }

    /// The next card to play, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// All cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn deck_of(tokens: &[&str]) -> Deck {
        Deck::new(
            tokens
                .iter()
                .map(|t| Card::standard(t, Suit::Spades).unwrap())
                .collect(),
        )
    }

    fn codes(deck: &Deck) -> Vec<&str> {
        deck.cards().iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_draw_is_fifo() {
        let mut deck = deck_of(&["2", "3", "4"]);

        assert_eq!(deck.draw().unwrap().code.as_str(), "2S");
        assert_eq!(deck.draw().unwrap().code.as_str(), "3S");
        assert_eq!(deck.draw().unwrap().code.as_str(), "4S");
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_draw_from_empty_is_none() {
        let mut deck = Deck::default();
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_claimed_cards_accumulate_at_the_bottom() {
        let mut deck = deck_of(&["2", "3"]);
        deck.push_bottom(Card::standard("ACE", Suit::Hearts).unwrap());

        assert_eq!(codes(&deck), vec!["2S", "3S", "AH"]);

        deck.extend_bottom([
            Card::standard("KING", Suit::Hearts).unwrap(),
            Card::standard("QUEEN", Suit::Hearts).unwrap(),
        ]);

        assert_eq!(codes(&deck), vec!["2S", "3S", "AH", "KH", "QH"]);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        // Selecting the 3rd of 5 visible cards removes exactly that
        // card and keeps the other four in order.
        let mut deck = deck_of(&["2", "3", "4", "5", "6"]);

        let removed = deck.remove(&CardCode::new("4S")).unwrap();

        assert_eq!(removed.code.as_str(), "4S");
        assert_eq!(codes(&deck), vec!["2S", "3S", "5S", "6S"]);
    }

    #[test]
    fn test_remove_missing_card_is_none() {
        let mut deck = deck_of(&["2", "3"]);
        assert_eq!(deck.remove(&CardCode::new("AH")), None);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_visible_window_clamps() {
        let deck = deck_of(&["2", "3", "4"]);

        assert_eq!(deck.visible(5).len(), 3);
        assert_eq!(deck.visible(2).len(), 2);
        assert_eq!(deck.visible(2)[0].code.as_str(), "2S");
        assert!(Deck::default().visible(5).is_empty());
    }

    #[test]
    fn test_front_peeks_without_removing() {
        let deck = deck_of(&["9", "2"]);
        assert_eq!(deck.front().unwrap().code.as_str(), "9S");
        assert_eq!(deck.len(), 2);
    }
}
