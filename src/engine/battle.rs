//! Battle resolution: tie chains of forced face-down draws.
//!
//! A battle starts when a turn's two cards share a rank. Each round
//! both sides burn their front card into the contested pile, player's
//! card first; the first rank difference awards the whole pile, and a
//! side running out of cards aborts the chain. What happens to the
//! pile on an abort is a house rule, [`StarvationPolicy`].

use crate::core::{Card, Side, SideMap, StarvationPolicy};
use crate::deck::Deck;

/// Battle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    /// Ranks are still tied; the chain continues.
    InBattle,
    /// A rank difference broke the tie.
    Resolved(Side),
    /// A deck ran out before the tie broke.
    Aborted,
}

/// How an aborted battle disposed of the contested pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AbortOutcome {
    /// The side that still has cards, if exactly one does.
    pub survivor: Option<Side>,
    /// Cards awarded to the survivor (zero under the discard policy).
    pub claimed: usize,
}

/// Clear a card's display flags on its way into a winner's deck.
pub(crate) fn claimed(mut card: Card) -> Card {
    card.claim();
    card
}

/// Draw one burn card per side into the contested pile.
///
/// Returns `Aborted` without touching the pile when either deck is
/// empty; otherwise both fronts are burned (face down) and pushed in
/// player-then-bot order, and the battle stays `InBattle` until the
/// rank check.
pub(crate) fn draw_burns(decks: &mut SideMap<Deck>, middle: &mut Vec<Card>) -> BattleStatus {
    if decks[Side::Player].is_empty() || decks[Side::Bot].is_empty() {
        return BattleStatus::Aborted;
    }

    for side in Side::ALL {
        if let Some(mut card) = decks[side].draw() {
            card.flipped = true;
            card.burned = true;
            middle.push(card);
        }
    }

    BattleStatus::InBattle
}

/// Compare the last pair of burn cards in the pile.
pub(crate) fn check_burns(middle: &[Card]) -> BattleStatus {
    match middle {
        [.., player_burn, bot_burn] => {
            if player_burn.rank > bot_burn.rank {
                BattleStatus::Resolved(Side::Player)
            } else if player_burn.rank < bot_burn.rank {
                BattleStatus::Resolved(Side::Bot)
            } else {
                BattleStatus::InBattle
            }
        }
        _ => BattleStatus::InBattle,
    }
}

/// Dispose of the contested pile after a starved battle.
///
/// Under `AwardToRemaining` the surviving side claims the pile; under
/// `DiscardContested` (or when both decks are empty) the cards leave
/// play entirely.
pub(crate) fn abort(
    decks: &mut SideMap<Deck>,
    middle: &mut Vec<Card>,
    policy: StarvationPolicy,
) -> AbortOutcome {
    let survivor = match (decks[Side::Player].is_empty(), decks[Side::Bot].is_empty()) {
        (false, true) => Some(Side::Player),
        (true, false) => Some(Side::Bot),
        _ => None,
    };

    let contested = std::mem::take(middle);

    match (policy, survivor) {
        (StarvationPolicy::AwardToRemaining, Some(side)) => {
            tracing::debug!(side = %side, cards = contested.len(), "battle starved; pile awarded");
            let count = contested.len();
            decks[side].extend_bottom(contested.into_iter().map(claimed));
            AbortOutcome {
                survivor,
                claimed: count,
            }
        }
        _ => {
            tracing::warn!(lost = contested.len(), "battle starved; contested cards leave play");
            AbortOutcome {
                survivor,
                claimed: 0,
            }
        }
    }
}
