//! Core types: cards, ranks, seats, configuration, RNG.
//!
//! These are the building blocks the engine works in terms of; nothing
//! here knows about turns or battles.

pub mod card;
pub mod config;
pub mod rng;
pub mod side;

pub use card::{Card, CardCode, CardImages, Rank, Suit};
pub use config::{GameConfig, StarvationPolicy};
pub use rng::DeckRng;
pub use side::{Side, SideMap};
