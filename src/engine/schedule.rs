//! Tick scheduler for visualization pacing.
//!
//! All "concurrency" in the engine is scheduled, delayed continuations
//! on one logical thread: events fire strictly ordered by (due tick,
//! insertion order), and each event's state updates commit before the
//! next fires. The queue is explicit and cancellable: a full reload
//! drops every pending event instead of racing nested timers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Engine events separated by pacing delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Reveal the bot's answer to the player's card.
    RevealBotCard,
    /// Compare the two revealed cards and route the turn.
    ResolveTurn,
    /// Draw one face-down burn card per side.
    BattleDraw,
    /// Compare the last pair of burn cards.
    BattleResolve,
}

/// Handle for cancelling a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventId(u64);

#[derive(Clone, Debug)]
struct Entry {
    due: u64,
    id: EventId,
    event: EngineEvent,
}

/// Cooperative single-threaded event queue driven by [`advance`].
///
/// [`advance`]: Scheduler::advance
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    queue: Vec<Entry>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule an event `delay` ticks from now.
    ///
    /// A zero delay still waits for the next `advance` call: nothing
    /// fires inside the call that scheduled it.
    pub fn schedule(&mut self, delay: u64, event: EngineEvent) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.queue.push(Entry {
            due: self.now + delay,
            id,
            event,
        });
        id
    }

    /// Cancel a pending event. Returns whether it was still pending.
    pub fn cancel(&mut self, id: EventId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|entry| entry.id != id);
        self.queue.len() != before
    }

    /// Drop every pending event.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Advance one tick and collect the events now due, ordered by
    /// (due tick, insertion order).
    pub fn advance(&mut self) -> SmallVec<[EngineEvent; 2]> {
        self.now += 1;
        let now = self.now;

        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.queue.drain(..).partition(|entry| entry.due <= now);
        self.queue = pending;

        due.sort_by_key(|entry| (entry.due, entry.id.0));
        due.into_iter().map(|entry| entry.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_fire_at_their_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1, EngineEvent::RevealBotCard);
        scheduler.schedule(2, EngineEvent::ResolveTurn);

        assert_eq!(
            scheduler.advance().as_slice(),
            &[EngineEvent::RevealBotCard]
        );
        assert_eq!(scheduler.advance().as_slice(), &[EngineEvent::ResolveTurn]);
        assert!(scheduler.advance().is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_same_tick_keeps_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1, EngineEvent::BattleDraw);
        scheduler.schedule(1, EngineEvent::BattleResolve);

        assert_eq!(
            scheduler.advance().as_slice(),
            &[EngineEvent::BattleDraw, EngineEvent::BattleResolve]
        );
    }

    #[test]
    fn test_overdue_events_fire_before_newer_ones() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(2, EngineEvent::ResolveTurn);
        scheduler.schedule(1, EngineEvent::RevealBotCard);

        // Tick 1: only the reveal is due.
        assert_eq!(
            scheduler.advance().as_slice(),
            &[EngineEvent::RevealBotCard]
        );
        assert_eq!(scheduler.advance().as_slice(), &[EngineEvent::ResolveTurn]);
    }

    #[test]
    fn test_zero_delay_waits_for_next_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, EngineEvent::BattleDraw);

        assert!(!scheduler.is_idle());
        assert_eq!(scheduler.advance().as_slice(), &[EngineEvent::BattleDraw]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(1, EngineEvent::BattleDraw);
        scheduler.schedule(1, EngineEvent::BattleResolve);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));

        assert_eq!(
            scheduler.advance().as_slice(),
            &[EngineEvent::BattleResolve]
        );
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1, EngineEvent::RevealBotCard);
        scheduler.schedule(3, EngineEvent::ResolveTurn);

        scheduler.cancel_all();

        assert!(scheduler.is_idle());
        assert!(scheduler.advance().is_empty());
    }

    #[test]
    fn test_ticks_advance_monotonically() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.now(), 0);

        scheduler.advance();
        scheduler.advance();
        assert_eq!(scheduler.now(), 2);
    }
}
