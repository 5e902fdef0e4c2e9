//! Board instance: one stack plus the coin state it owns.

use serde::{Deserialize, Serialize};

use super::coin::{CoinPair, CoinState};
use super::layout::{BoardLayout, layout};
use crate::config::LayoutConfig;
use crate::stack::{Slot, Stack};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", content = "slot", rename_all = "snake_case")]
pub enum BoardTarget {
    /// The active shape of a slot.
    Active(Slot),
    /// The ghost hint of a slot.
    Ghost(Slot),
}

impl BoardTarget {
    pub fn slot(self) -> Slot {
        match self {
            BoardTarget::Active(slot) | BoardTarget::Ghost(slot) => slot,
        }
    }

    pub fn pair(self) -> CoinPair {
        CoinPair::for_slot(self.slot())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardOptions {
    /// When false, clicks and toggles are ignored.
    pub interactive: bool,
    pub compact: bool,
    pub show_ghosts: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            compact: false,
            show_ghosts: true,
        }
    }
}

/// A single diagram on a page.
///
/// Each board owns its coin state; two boards never share it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    stack: Stack,
    coins: CoinState,
    options: BoardOptions,
}

impl Board {
    pub fn new(stack: Stack, options: BoardOptions) -> Self {
        let coins = CoinState::initial(&stack);
        Self {
            stack,
            coins,
            options,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn coins(&self) -> CoinState {
        self.coins
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.options.compact = compact;
    }

    pub fn set_show_ghosts(&mut self, show_ghosts: bool) {
        self.options.show_ghosts = show_ghosts;
    }

    /// Handles a click. Returns whether a coin flipped.
    pub fn click(&mut self, target: BoardTarget) -> bool {
        self.toggle(target.pair())
    }

    /// Flips a coin unless the board is non-interactive.
    pub fn toggle(&mut self, pair: CoinPair) -> bool {
        if !self.options.interactive {
            tracing::trace!(%pair, "ignoring toggle on static board");
            return false;
        }
        self.coins.toggle(pair);
        tracing::debug!(
            %pair,
            personality_type = %self.stack.personality_type,
            flipped = self.coins.is_flipped(pair),
            "coin toggled"
        );
        true
    }

    /// Re-instantiates the board for another stack, resetting the coins.
    pub fn set_stack(&mut self, stack: Stack) {
        self.coins = CoinState::initial(&stack);
        self.stack = stack;
    }

    pub fn layout(&self, config: &LayoutConfig) -> BoardLayout {
        let mut board = layout(&self.stack, self.coins, self.options.compact, config);
        board.ghosts_visible = self.options.show_ghosts;
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{PersonalityType, Variant};

    fn board(variant: Variant, options: BoardOptions) -> Board {
        Board::new(Stack::for_type(PersonalityType::INFP, variant), options)
    }

    #[test]
    fn test_click_on_ghost_toggles_same_pair() {
        let mut b = board(Variant::Standard, BoardOptions::default());
        assert!(b.click(BoardTarget::Ghost(Slot::D)));
        assert!(b.coins().outer_flipped);
        assert!(b.click(BoardTarget::Active(Slot::A)));
        assert!(!b.coins().outer_flipped);
        assert!(b.click(BoardTarget::Ghost(Slot::B)));
        assert!(b.coins().middle_flipped);
    }

    #[test]
    fn test_static_board_ignores_clicks() {
        let options = BoardOptions {
            interactive: false,
            ..BoardOptions::default()
        };
        let mut b = board(Variant::Standard, options);
        let before = b.coins();
        assert!(!b.click(BoardTarget::Active(Slot::A)));
        assert!(!b.toggle(CoinPair::Inner));
        assert_eq!(b.coins(), before);
    }

    #[test]
    fn test_set_stack_resets_coins() {
        let mut b = board(Variant::Standard, BoardOptions::default());
        b.toggle(CoinPair::Outer);
        b.set_stack(Stack::for_type(PersonalityType::INFP, Variant::Jumper));
        assert!(!b.coins().outer_flipped);
        assert!(b.coins().middle_flipped);
    }

    #[test]
    fn test_hiding_ghosts_keeps_active_positions() {
        let config = LayoutConfig::default();
        let mut b = board(Variant::Jumper, BoardOptions::default());
        b.set_compact(true);
        let shown = b.layout(&config);
        b.set_show_ghosts(false);
        let hidden = b.layout(&config);
        for slot in Slot::ALL {
            assert_eq!(shown.active(slot), hidden.active(slot));
        }
        assert_eq!(hidden.visible_ghost(Slot::A), None);
    }

    #[test]
    fn test_target_serialization() {
        let json = serde_json::to_value(BoardTarget::Ghost(Slot::C)).unwrap();
        assert_eq!(json["target"], "ghost");
        assert_eq!(json["slot"], "C");
    }
}
