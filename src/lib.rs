//! # bataille
//!
//! A War ("Bataille") card game engine: a human player against a bot,
//! one shuffled 52-card deck, turns resolved by rank comparison and
//! ties by battle chains of face-down burns.
//!
//! ## Design
//!
//! 1. **Explicit state machine**: every transition runs through one
//!    reducer over whole deck values. No timer closures, no hidden
//!    mutation across async boundaries.
//!
//! 2. **Cooperative pacing**: reveal/resolve ordering is a tick
//!    scheduler of explicit, cancellable events, so tests observe
//!    exactly what a user would see, in the same order.
//!
//! 3. **Black-box deck source**: shuffling is the source's problem;
//!    validation is the engine's. A failed or partial draw never
//!    reaches the table.
//!
//! ## Modules
//!
//! - `core`: cards, ranks, seats, configuration, RNG
//! - `deck`: ordered per-side decks
//! - `source`: the deck source boundary and wire payloads
//! - `engine`: scheduler, battle resolver, `WarGame`, view
//! - `error`: typed error taxonomy
//!
//! ## Example
//!
//! ```
//! use bataille::{ShuffledSource, WarGame};
//!
//! let mut game = WarGame::default();
//! game.deal(&mut ShuffledSource::new(42)).expect("local source always deals 52");
//!
//! game.play_turn();
//! game.run_until_settled();
//!
//! assert!(game.view().middle.is_empty());
//! ```

pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    Card, CardCode, CardImages, DeckRng, GameConfig, Rank, Side, SideMap, StarvationPolicy, Suit,
};

pub use crate::deck::Deck;

pub use crate::engine::{
    BattleStatus, CardView, EngineEvent, EventId, GamePhase, GameResult, PlayOutcome, Scheduler,
    TableView, TurnRecord, WarGame,
};

pub use crate::error::GameError;

pub use crate::source::{
    validate_draw, CardPayload, DeckSource, DrawResponse, ImagesPayload, ShuffledSource, DECK_SIZE,
};
