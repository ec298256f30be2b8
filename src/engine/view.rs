//! Presentation-facing snapshot of the table.
//!
//! The presentation layer renders from [`TableView`] alone: deck
//! sizes, the middle pile with face-down flags, the selectable window,
//! and the turn gate. Everything is serializable so a web front end
//! can consume it directly.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardCode, Suit};
use crate::engine::game::GamePhase;

/// One card as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub code: CardCode,
    pub value: String,
    pub suit: Suit,
    pub image: String,
    /// Show the card back instead of the face.
    pub face_down: bool,
}

impl CardView {
    pub(crate) fn of(card: &Card) -> Self {
        Self {
            code: card.code.clone(),
            value: card.value.clone(),
            suit: card.suit,
            image: card.image.clone(),
            face_down: card.flipped,
        }
    }
}

/// Snapshot of everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: GamePhase,

    /// Player deck size.
    pub player_cards: usize,

    /// Bot deck size.
    pub bot_cards: usize,

    /// Cards currently in contest, in push order.
    pub middle: Vec<CardView>,

    /// The player's selectable window; empty unless a turn may start.
    pub selectable: Vec<CardView>,

    /// Whether a new turn may be started.
    pub can_play: bool,
}
