//! The War game: turn engine, battle loop, and phase machine.
//!
//! Every state transition runs through `apply_event`, a single reducer
//! over explicit deck and pile values: no timer closures, no mutation
//! captured across await points. Pacing belongs to the [`Scheduler`];
//! wall-clock time never appears here.
//!
//! ## Turn flow
//!
//! `play_turn` exposes the player's card and schedules the bot's
//! reveal; the reveal schedules resolution. Resolution either awards
//! both cards to the higher rank's deck bottom (player's card first)
//! or, on a tie, seeds a battle with the pile as it stands. Battle
//! rounds alternate scheduled draw and check events until a rank
//! difference or a starved deck ends the chain.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardCode, GameConfig, Side, SideMap};
use crate::deck::Deck;
use crate::engine::battle::{self, BattleStatus};
use crate::engine::schedule::{EngineEvent, Scheduler};
use crate::engine::view::{CardView, TableView};
use crate::error::GameError;
use crate::source::{DeckSource, DECK_SIZE};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side holds cards, the other does not.
    Winner(Side),
    /// Both decks ran out in the same starved battle.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(winner) if *winner == side)
    }
}

/// Where the game currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No deck has been dealt yet, or the last deal failed.
    Uninitialized,
    /// Waiting for the player to start a turn.
    Idle,
    /// A turn's reveals are being paced out.
    TurnInProgress,
    /// A tie chain is running.
    Battling,
    /// A deck ran out.
    GameOver(GameResult),
}

/// Outcome of a play request. Rejections are neutral no-ops, not
/// errors: the table is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The turn started; reveals are scheduled.
    Started,
    /// The player deck had no card to play.
    NoCardPlayed,
    /// The gate is closed, or the selection fell outside the visible
    /// window.
    NotAllowed,
}

/// One resolved turn in the history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// Which side claimed the pile; `None` when a starved battle
    /// resolved nobody.
    pub winner: Option<Side>,

    /// Cards that actually reached the winner's deck.
    pub cards_claimed: usize,

    /// Battle rounds fought, zero for a plain turn.
    pub battle_rounds: u32,
}

/// The game engine.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: GameConfig,
    phase: GamePhase,
    decks: SideMap<Deck>,
    middle: Vec<Card>,
    scheduler: Scheduler,
    turn_number: u32,
    battle_rounds: u32,
    history: Vector<TurnRecord>,
}

impl Default for WarGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl WarGame {
    /// Create an undealt game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Uninitialized,
            decks: SideMap::with_default(),
            middle: Vec::new(),
            scheduler: Scheduler::new(),
            turn_number: 0,
            battle_rounds: 0,
            history: Vector::new(),
        }
    }

    // === Setup ===

    /// Draw a fresh deck from the source and split it 26/26.
    ///
    /// On failure the table is cleared back to `Uninitialized` and the
    /// error is returned for the presentation layer to show; the
    /// engine never starts from a partial set. Calling `deal` again is
    /// the retry.
    pub fn deal(&mut self, source: &mut dyn DeckSource) -> Result<(), GameError> {
        let mut cards = match source.draw() {
            Ok(cards) => cards,
            Err(err) => {
                tracing::warn!(error = %err, "deck source draw failed");
                self.reset();
                return Err(err);
            }
        };

        // The source contract is 52 cards; enforce it here too so a
        // hand-rolled source cannot under-deal.
        if cards.len() != DECK_SIZE {
            let err = GameError::IncompleteDeck {
                count: cards.len(),
                expected: DECK_SIZE,
            };
            tracing::warn!(error = %err, "deck source under- or over-dealt");
            self.reset();
            return Err(err);
        }

        let bot_half = cards.split_off(DECK_SIZE / 2);
        self.scheduler.cancel_all();
        self.decks = SideMap::new(|side| match side {
            Side::Player => Deck::new(cards.clone()),
            Side::Bot => Deck::new(bot_half.clone()),
        });
        self.middle.clear();
        self.turn_number = 0;
        self.battle_rounds = 0;
        self.history = Vector::new();
        self.phase = GamePhase::Idle;

        tracing::debug!("dealt fresh deck, 26 cards per side");
        Ok(())
    }

    /// Full reload: cancel everything pending and clear the table.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.decks = SideMap::with_default();
        self.middle.clear();
        self.turn_number = 0;
        self.battle_rounds = 0;
        self.history = Vector::new();
        self.phase = GamePhase::Uninitialized;
    }

    // === User actions ===

    /// Whether a new turn may be started.
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.phase == GamePhase::Idle && !self.decks[Side::Player].is_empty()
    }

    /// Play the front card of the player's deck.
    pub fn play_turn(&mut self) -> PlayOutcome {
        if self.phase != GamePhase::Idle {
            return PlayOutcome::NotAllowed;
        }

        match self.decks[Side::Player].draw() {
            Some(card) => {
                self.begin_turn(card);
                PlayOutcome::Started
            }
            None => PlayOutcome::NoCardPlayed,
        }
    }

    /// Play an identified card from the visible window instead of the
    /// front card.
    pub fn play_selected(&mut self, code: &CardCode) -> PlayOutcome {
        if self.phase != GamePhase::Idle {
            return PlayOutcome::NotAllowed;
        }

        let in_window = self.decks[Side::Player]
            .visible(self.config.visible_window)
            .iter()
            .any(|card| &card.code == code);
        if !in_window {
            return PlayOutcome::NotAllowed;
        }

        match self.decks[Side::Player].remove(code) {
            Some(card) => {
                self.begin_turn(card);
                PlayOutcome::Started
            }
            None => PlayOutcome::NotAllowed,
        }
    }

    /// Advance one tick, firing whatever pacing events come due.
    pub fn tick(&mut self) {
        for event in self.scheduler.advance() {
            self.apply_event(event);
        }
    }

    /// Pump ticks until no pacing event remains. Battles always reach
    /// a terminal state, so this cannot spin.
    pub fn run_until_settled(&mut self) {
        while !self.scheduler.is_idle() {
            self.tick();
        }
    }

    // === Observers ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The result once a deck has run out.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        self.decks[side].len()
    }

    /// Cards currently in contest, in push order.
    #[must_use]
    pub fn middle(&self) -> &[Card] {
        &self.middle
    }

    /// Cards still in play across both decks and the middle pile.
    ///
    /// 52 everywhere except after a starved battle under the discard
    /// policy.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks[Side::Player].len() + self.decks[Side::Bot].len() + self.middle.len()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> TableView {
        let selectable = if self.phase == GamePhase::Idle {
            self.decks[Side::Player]
                .visible(self.config.visible_window)
                .iter()
                .map(CardView::of)
                .collect()
        } else {
            Vec::new()
        };

        TableView {
            phase: self.phase,
            player_cards: self.decks[Side::Player].len(),
            bot_cards: self.decks[Side::Bot].len(),
            middle: self.middle.iter().map(CardView::of).collect(),
            selectable,
            can_play: self.can_play(),
        }
    }

    // === Reducer ===

    fn apply_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::RevealBotCard => self.reveal_bot_card(),
            EngineEvent::ResolveTurn => self.resolve_turn(),
            EngineEvent::BattleDraw => self.battle_draw(),
            EngineEvent::BattleResolve => self.battle_resolve(),
        }
    }

    fn begin_turn(&mut self, card: Card) {
        self.turn_number += 1;
        self.battle_rounds = 0;
        tracing::debug!(turn = self.turn_number, card = %card, "player card revealed");
        self.middle.push(card);
        self.phase = GamePhase::TurnInProgress;
        self.scheduler
            .schedule(self.config.bot_reveal_delay, EngineEvent::RevealBotCard);
    }

    fn reveal_bot_card(&mut self) {
        match self.decks[Side::Bot].draw() {
            Some(card) => {
                tracing::debug!(card = %card, "bot card revealed");
                self.middle.push(card);
                self.scheduler
                    .schedule(self.config.resolve_delay, EngineEvent::ResolveTurn);
            }
            None => {
                // The bot cannot answer: hand the played card back and
                // end the game.
                tracing::warn!("bot deck exhausted at reveal; game over");
                let returned = std::mem::take(&mut self.middle);
                let count = returned.len();
                self.decks[Side::Player].extend_bottom(returned.into_iter().map(battle::claimed));
                self.history.push_back(TurnRecord {
                    turn: self.turn_number,
                    winner: Some(Side::Player),
                    cards_claimed: count,
                    battle_rounds: 0,
                });
                self.phase = GamePhase::GameOver(GameResult::Winner(Side::Player));
            }
        }
    }

    fn resolve_turn(&mut self) {
        let (player_rank, bot_rank) = match self.middle.as_slice() {
            [player_card, bot_card] => (player_card.rank, bot_card.rank),
            // A resolve without exactly two revealed cards has nothing
            // to compare.
            _ => return,
        };

        if player_rank > bot_rank {
            self.award(Side::Player);
        } else if player_rank < bot_rank {
            self.award(Side::Bot);
        } else {
            tracing::debug!(rank = player_rank.value(), "ranks tied; battle begins");
            self.phase = GamePhase::Battling;
            self.scheduler
                .schedule(self.config.battle_draw_delay, EngineEvent::BattleDraw);
        }
    }

    fn battle_draw(&mut self) {
        match battle::draw_burns(&mut self.decks, &mut self.middle) {
            BattleStatus::Aborted => self.abort_battle(),
            _ => {
                self.battle_rounds += 1;
                self.scheduler
                    .schedule(self.config.battle_resolve_delay, EngineEvent::BattleResolve);
            }
        }
    }

    fn battle_resolve(&mut self) {
        match battle::check_burns(&self.middle) {
            BattleStatus::Resolved(winner) => self.award(winner),
            _ => {
                tracing::debug!(round = self.battle_rounds, "burn ranks tied; battle continues");
                self.scheduler
                    .schedule(self.config.battle_draw_delay, EngineEvent::BattleDraw);
            }
        }
    }

    /// Award the whole middle pile to `winner` and close the turn.
    fn award(&mut self, winner: Side) {
        let pile = std::mem::take(&mut self.middle);
        let count = pile.len();
        self.decks[winner].extend_bottom(pile.into_iter().map(battle::claimed));

        tracing::debug!(
            winner = %winner,
            cards = count,
            rounds = self.battle_rounds,
            "turn resolved"
        );
        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            winner: Some(winner),
            cards_claimed: count,
            battle_rounds: self.battle_rounds,
        });

        // The game ends implicitly when a deck reaches zero.
        self.phase = if self.decks[winner.opponent()].is_empty() {
            GamePhase::GameOver(GameResult::Winner(winner))
        } else {
            GamePhase::Idle
        };
    }

    fn abort_battle(&mut self) {
        let outcome = battle::abort(&mut self.decks, &mut self.middle, self.config.starvation);

        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            winner: if outcome.claimed > 0 {
                outcome.survivor
            } else {
                None
            },
            cards_claimed: outcome.claimed,
            battle_rounds: self.battle_rounds,
        });

        let result = outcome
            .survivor
            .map_or(GameResult::Draw, GameResult::Winner);
        self.phase = GamePhase::GameOver(result);
    }
}
