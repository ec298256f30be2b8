//! Wire types for the deck source draw response.
//!
//! Field names mirror the remote draw API's JSON verbatim so these
//! structs deserialize straight from a fetched body. Conversion into
//! engine [`Card`]s happens through `TryFrom`, which is where token
//! validation fires.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardImages};
use crate::error::GameError;

/// Alternate image formats for one card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesPayload {
    pub svg: String,
    pub png: String,
}

/// One card in a draw response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayload {
    pub code: String,
    pub value: String,
    pub suit: String,
    pub image: String,
    pub images: ImagesPayload,
}

/// Response to a "draw a fresh deck" request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    pub success: bool,
    pub deck_id: String,
    pub remaining: u32,
    pub cards: Vec<CardPayload>,
}

impl DrawResponse {
    /// Parse a JSON draw response fetched by the caller.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|err| GameError::SourceFetch {
            reason: err.to_string(),
        })
    }
}

impl TryFrom<CardPayload> for Card {
    type Error = GameError;

    fn try_from(payload: CardPayload) -> Result<Self, Self::Error> {
        Card::new(
            payload.code,
            payload.value,
            &payload.suit,
            payload.image,
            CardImages {
                svg: payload.images.svg,
                png: payload.images.png,
            },
        )
    }
}
