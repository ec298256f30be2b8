//! Card data model and face-value resolution.
//!
//! ## Rank
//!
//! Face-value tokens map to a strictly ordered numeric rank:
//! ACE=14 > KING=13 > QUEEN=12 > JACK=11 > "10"=10 > ... > "2"=2.
//! Unrecognized tokens are rejected with `GameError::InvalidCardValue`
//! rather than silently coerced.
//!
//! ## Card
//!
//! Cards are immutable in content. Only the `flipped` and `burned`
//! display flags, and which pile the card sits in, change over a game.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// Unique card identifier, e.g. `"QS"` or `"0D"` (ten of diamonds).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCode(String);

impl CardCode {
    /// Create a card code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric rank used for strict ordering comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// Resolve a face-value token to its rank.
    ///
    /// Court tokens map to fixed ranks; `"2"`..`"10"` parse to their
    /// integer value. Anything else is `GameError::InvalidCardValue`.
    pub fn from_token(token: &str) -> Result<Self, GameError> {
        match token {
            "ACE" => Ok(Self::ACE),
            "KING" => Ok(Self::KING),
            "QUEEN" => Ok(Self::QUEEN),
            "JACK" => Ok(Self::JACK),
            _ => token
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .map(Rank)
                .ok_or_else(|| GameError::InvalidCardValue {
                    token: token.to_string(),
                }),
        }
    }

    /// The numeric comparison value (2-14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Card suit, (de)serialized as the draw API's uppercase tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in a stable order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Parse an uppercase suit token.
    pub fn from_token(token: &str) -> Result<Self, GameError> {
        match token {
            "SPADES" => Ok(Suit::Spades),
            "HEARTS" => Ok(Suit::Hearts),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "CLUBS" => Ok(Suit::Clubs),
            _ => Err(GameError::InvalidSuit {
                token: token.to_string(),
            }),
        }
    }

    /// The uppercase wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Hearts => "HEARTS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
        }
    }

    /// Single-letter suffix used in card codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Image pair carried alongside the primary image URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    pub svg: String,
    pub png: String,
}

/// A playing card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique code within a deck.
    pub code: CardCode,

    /// Original face-value token (`"2"`..`"10"`, `"JACK"`, ...).
    pub value: String,

    /// Rank resolved from the value token.
    pub rank: Rank,

    pub suit: Suit,

    /// Primary image URL.
    pub image: String,

    /// Alternate image formats.
    pub images: CardImages,

    /// Displayed face-down.
    pub flipped: bool,

    /// Set while the card sits in an unclaimed battle pile.
    pub burned: bool,
}

impl Card {
    /// Build a card from wire tokens, resolving rank and suit up front
    /// so an invalid token can never reach the table.
    pub fn new(
        code: impl Into<String>,
        value: impl Into<String>,
        suit_token: &str,
        image: impl Into<String>,
        images: CardImages,
    ) -> Result<Self, GameError> {
        let value = value.into();
        let rank = Rank::from_token(&value)?;
        let suit = Suit::from_token(suit_token)?;
        Ok(Self {
            code: CardCode::new(code),
            value,
            rank,
            suit,
            image: image.into(),
            images,
            flipped: false,
            burned: false,
        })
    }

    /// Build a standard-deck card, synthesizing the code and the static
    /// image URLs the remote API serves for it.
    pub fn standard(value: &str, suit: Suit) -> Result<Self, GameError> {
        let value_letter = match value {
            // Ten is "0" in card codes, not "1".
            "10" => '0',
            other => other.chars().next().unwrap_or('?'),
        };
        let code = format!("{value_letter}{}", suit.letter());
        let image = format!("https://deckofcardsapi.com/static/img/{code}.png");
        let images = CardImages {
            svg: format!("https://deckofcardsapi.com/static/img/{code}.svg"),
            png: image.clone(),
        };
        Self::new(code, value, suit.token(), image, images)
    }

    /// Clear the display flags once a contested pile is claimed.
    pub(crate) fn claim(&mut self) {
        self.flipped = false;
        self.burned = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}
