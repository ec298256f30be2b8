//! Engine configuration: pacing delays and house rules.
//!
//! Delays are measured in scheduler ticks, never wall-clock time. The
//! presentation layer decides how fast ticks run; the engine only
//! guarantees the ordering they impose.

use serde::{Deserialize, Serialize};

/// What happens to the contested pile when a battle starves, i.e. one
/// side runs out of cards before the tie chain breaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarvationPolicy {
    /// Drop the contested cards from play. This preserves the original
    /// house rule, and knowingly breaks 52-card conservation on this
    /// one path.
    #[default]
    DiscardContested,

    /// Award the contested pile to the side that still has cards.
    AwardToRemaining,
}

/// Game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ticks between the player's reveal and the bot's.
    pub bot_reveal_delay: u64,

    /// Ticks between the bot's reveal and turn resolution.
    pub resolve_delay: u64,

    /// Ticks before a battle round draws its burn cards.
    pub battle_draw_delay: u64,

    /// Ticks between a battle draw and its rank check.
    pub battle_resolve_delay: u64,

    /// How many of the player's top cards are selectable.
    pub visible_window: usize,

    /// Disposal of the contested pile when a battle starves.
    pub starvation: StarvationPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_reveal_delay: 1,
            resolve_delay: 1,
            battle_draw_delay: 1,
            battle_resolve_delay: 1,
            visible_window: 5,
            starvation: StarvationPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Replace the starvation policy.
    #[must_use]
    pub fn with_starvation(mut self, policy: StarvationPolicy) -> Self {
        self.starvation = policy;
        self
    }

    /// Replace the selectable-window width.
    #[must_use]
    pub fn with_visible_window(mut self, window: usize) -> Self {
        self.visible_window = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.visible_window, 5);
        assert_eq!(config.starvation, StarvationPolicy::DiscardContested);
        assert_eq!(config.bot_reveal_delay, 1);
    }

    #[test]
    fn test_with_helpers() {
        let config = GameConfig::default()
            .with_starvation(StarvationPolicy::AwardToRemaining)
            .with_visible_window(3);

        assert_eq!(config.starvation, StarvationPolicy::AwardToRemaining);
        assert_eq!(config.visible_window, 3);
    }
}
