//! The game engine: pacing, battle resolution, the `WarGame` reducer,
//! and the presentation view.

pub mod battle;
pub mod game;
pub mod schedule;
pub mod view;

pub use battle::BattleStatus;
pub use game::{GamePhase, GameResult, PlayOutcome, TurnRecord, WarGame};
pub use schedule::{EngineEvent, EventId, Scheduler};
pub use view::{CardView, TableView};
