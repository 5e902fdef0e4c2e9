//! The layout engine.
//!
//! Maps a stack, its coin state and the compact flag to a position, ghost
//! position, radius and font size for each slot. The computation is pure and
//! total over well-formed stacks.
//!
//! Placement rules:
//!
//! - A function's column is fixed by its own attitude: introverted functions
//!   sit on the left, extraverted on the right.
//! - A sits on the top (hero) row in its column and D on the bottom (demon)
//!   row in the other column, so the two always occupy opposite diagonals.
//!   Flipping the outer coin swaps active and ghost for both.
//! - B and C sit on the inner square in their own columns. B takes the top
//!   row while the inner coin is unflipped and C takes it once flipped; the
//!   savior flags never move. Standard boards therefore open with B (their
//!   savior) on top, and jumper boards, whose inner coin starts flipped,
//!   open with C on top.

use serde::{Deserialize, Serialize};

use super::coin::CoinState;
use super::geometry::{Column, Point, Row};
use crate::config::LayoutConfig;
use crate::function::CognitiveFunction;
use crate::stack::{Slot, Stack, StackFunction};

/// Visual descriptor for one slot, consumed by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLayout {
    #[serde(rename = "slotId")]
    pub slot: Slot,
    pub code: CognitiveFunction,
    pub rank: u8,
    pub is_savior: bool,
    pub active_position: Point,
    pub ghost_position: Point,
    pub radius: f64,
    pub font_size: f64,
}

/// Full board descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLayout {
    pub coins: CoinState,
    pub compact: bool,
    /// Whether the renderer should draw ghost hints. Never affects positions.
    pub ghosts_visible: bool,
    pub slots: [SlotLayout; 4],
}

impl BoardLayout {
    pub fn get(&self, slot: Slot) -> &SlotLayout {
        &self.slots[slot.index()]
    }

    pub fn active(&self, slot: Slot) -> Point {
        self.get(slot).active_position
    }

    pub fn ghost(&self, slot: Slot) -> Point {
        self.get(slot).ghost_position
    }

    /// Ghost position if ghosts are shown.
    pub fn visible_ghost(&self, slot: Slot) -> Option<Point> {
        self.ghosts_visible.then(|| self.ghost(slot))
    }
}

/// Column a function renders in.
pub fn column_of(code: CognitiveFunction) -> Column {
    if code.is_introverted() {
        Column::Left
    } else {
        Column::Right
    }
}

/// Row a middle function renders in.
fn middle_row(function: &StackFunction, middle_flipped: bool) -> Row {
    let on_top = match function.slot {
        Slot::C => middle_flipped,
        _ => !middle_flipped,
    };
    if on_top { Row::Top } else { Row::Bottom }
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    active: Point,
    ghost: Point,
}

impl Placement {
    fn swapped(self) -> Self {
        Self {
            active: self.ghost,
            ghost: self.active,
        }
    }
}

/// Insets both ends of a segment toward its midpoint by independent fractions.
fn inset_pair(p: Point, q: Point, p_inset: f64, q_inset: f64) -> (Point, Point) {
    let mid = p.midpoint(q);
    (p.toward(mid, p_inset), q.toward(mid, q_inset))
}

/// Applies the compact transform to a pair, treating active and ghost
/// positions identically.
fn compact_pair(
    first: Placement,
    second: Placement,
    first_inset: f64,
    second_inset: f64,
) -> (Placement, Placement) {
    let (first_active, second_active) =
        inset_pair(first.active, second.active, first_inset, second_inset);
    let (first_ghost, second_ghost) =
        inset_pair(first.ghost, second.ghost, first_inset, second_inset);
    (
        Placement {
            active: first_active,
            ghost: first_ghost,
        },
        Placement {
            active: second_active,
            ghost: second_ghost,
        },
    )
}

fn place_outer(stack: &Stack, coins: CoinState, config: &LayoutConfig) -> (Placement, Placement) {
    let g = &config.geometry;
    let hero_column = column_of(stack.hero().code);
    let inferior_column = hero_column.other();

    let hero = Placement {
        active: g.outer(Row::Top, hero_column),
        ghost: g.outer(Row::Top, inferior_column),
    };
    let inferior = Placement {
        active: g.outer(Row::Bottom, inferior_column),
        ghost: g.outer(Row::Bottom, hero_column),
    };

    if coins.outer_flipped {
        (hero.swapped(), inferior.swapped())
    } else {
        (hero, inferior)
    }
}

fn place_middle(function: &StackFunction, coins: CoinState, config: &LayoutConfig) -> Placement {
    let column = column_of(function.code);
    let row = middle_row(function, coins.middle_flipped);
    Placement {
        active: config.geometry.inner(row, column),
        ghost: config.geometry.inner(row.other(), column),
    }
}

/// Computes the board layout.
pub fn layout(stack: &Stack, coins: CoinState, compact: bool, config: &LayoutConfig) -> BoardLayout {
    let (mut a, mut d) = place_outer(stack, coins, config);
    let mut b = place_middle(stack.get(Slot::B), coins, config);
    let mut c = place_middle(stack.get(Slot::C), coins, config);

    if compact {
        let insets = &config.compact;
        (a, d) = compact_pair(a, d, insets.hero_inset, insets.inferior_inset);
        (b, c) = compact_pair(b, c, insets.middle_inset, insets.middle_inset);
    }

    let describe = |slot: Slot, placement: Placement| {
        let function = stack.get(slot);
        SlotLayout {
            slot,
            code: function.code,
            rank: function.rank,
            is_savior: function.is_savior,
            active_position: placement.active,
            ghost_position: placement.ghost,
            radius: config.radius(slot, compact),
            font_size: config.font_size(slot, compact),
        }
    };

    BoardLayout {
        coins,
        compact,
        ghosts_visible: true,
        slots: [
            describe(Slot::A, a),
            describe(Slot::B, b),
            describe(Slot::C, c),
            describe(Slot::D, d),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coin::CoinPair;
    use crate::function::CognitiveFunction::*;
    use crate::stack::{PersonalityType, Variant};

    fn infp(variant: Variant) -> Stack {
        Stack::for_type(PersonalityType::INFP, variant)
    }

    #[test]
    fn test_infp_standard_default_positions() {
        let config = LayoutConfig::default();
        let g = config.geometry;
        let board = layout(&infp(Variant::Standard), CoinState::default(), false, &config);

        assert_eq!(board.get(Slot::A).code, Fi);
        assert_eq!(board.active(Slot::A), g.hero_left);
        assert_eq!(board.ghost(Slot::A), g.hero_right);
        assert_eq!(board.active(Slot::D), g.demon_right);
        assert_eq!(board.ghost(Slot::D), g.demon_left);
        assert_eq!(board.active(Slot::B), g.inner_right_top);
        assert_eq!(board.ghost(Slot::B), g.inner_right_bottom);
        assert_eq!(board.active(Slot::C), g.inner_left_bottom);
        assert_eq!(board.ghost(Slot::C), g.inner_left_top);
    }

    #[test]
    fn test_extraverted_hero_is_mirrored() {
        let config = LayoutConfig::default();
        let g = config.geometry;
        let stack = Stack::for_type(PersonalityType::ENTJ, Variant::Standard);
        let board = layout(&stack, CoinState::default(), false, &config);

        assert_eq!(board.get(Slot::A).code, Te);
        assert_eq!(board.active(Slot::A), g.hero_right);
        assert_eq!(board.active(Slot::D), g.demon_left);
    }

    #[test]
    fn test_outer_flip_only_moves_outer_pair() {
        let config = LayoutConfig::default();
        let g = config.geometry;
        let stack = infp(Variant::Standard);
        let before = layout(&stack, CoinState::default(), false, &config);
        let after = layout(&stack, CoinState::default().toggled(CoinPair::Outer), false, &config);

        assert_eq!(after.active(Slot::A), g.hero_right);
        assert_eq!(after.active(Slot::D), g.demon_left);
        assert_eq!(after.get(Slot::B), before.get(Slot::B));
        assert_eq!(after.get(Slot::C), before.get(Slot::C));
    }

    #[test]
    fn test_middle_flip_inverts_rows_only() {
        let config = LayoutConfig::default();
        let g = config.geometry;
        let stack = infp(Variant::Standard);
        let flipped = layout(&stack, CoinState::default().toggled(CoinPair::Inner), false, &config);

        assert_eq!(flipped.active(Slot::B), g.inner_right_bottom);
        assert_eq!(flipped.active(Slot::C), g.inner_left_top);
        assert!(flipped.get(Slot::B).is_savior);
    }

    #[test]
    fn test_jumper_opens_with_savior_on_top() {
        let config = LayoutConfig::default();
        let g = config.geometry;
        let stack = infp(Variant::Jumper);
        let board = layout(&stack, CoinState::initial(&stack), false, &config);

        let c = board.get(Slot::C);
        assert_eq!((c.code, c.is_savior), (Si, true));
        assert_eq!(c.active_position, g.inner_left_top);
        assert_eq!(c.ghost_position, g.inner_left_bottom);
        assert_eq!(board.active(Slot::B), g.inner_right_bottom);

        let coins = CoinState::initial(&stack).toggled(CoinPair::Inner);
        let toggled = layout(&stack, coins, false, &config);
        assert_eq!(toggled.active(Slot::B), g.inner_right_top);
        assert_eq!(toggled.active(Slot::C), g.inner_left_bottom);
    }

    #[test]
    fn test_compact_insets_toward_midpoints() {
        let config = LayoutConfig::default();
        let stack = infp(Variant::Standard);
        let full = layout(&stack, CoinState::default(), false, &config);
        let compact = layout(&stack, CoinState::default(), true, &config);

        let mid = full.active(Slot::A).midpoint(full.active(Slot::D));
        assert_eq!(
            compact.active(Slot::A),
            full.active(Slot::A).toward(mid, config.compact.hero_inset)
        );
        assert_eq!(
            compact.active(Slot::D),
            full.active(Slot::D).toward(mid, config.compact.inferior_inset)
        );
        assert!(compact.get(Slot::A).radius < full.get(Slot::A).radius);
    }

    #[test]
    fn test_compact_ghost_matches_flipped_active() {
        let config = LayoutConfig::default();
        let stack = infp(Variant::Standard);
        for pair in [CoinPair::Outer, CoinPair::Inner] {
            let base = layout(&stack, CoinState::default(), true, &config);
            let flipped = layout(&stack, CoinState::default().toggled(pair), true, &config);
            for slot in pair.slots() {
                assert_eq!(base.ghost(slot), flipped.active(slot));
                assert_eq!(base.active(slot), flipped.ghost(slot));
            }
        }
    }

    #[test]
    fn test_visible_ghost_respects_flag() {
        let config = LayoutConfig::default();
        let mut board = layout(&infp(Variant::Standard), CoinState::default(), false, &config);
        assert!(board.visible_ghost(Slot::A).is_some());
        board.ghosts_visible = false;
        assert_eq!(board.visible_ghost(Slot::A), None);
    }

    #[test]
    fn test_serialized_shape() {
        let config = LayoutConfig::default();
        let board = layout(&infp(Variant::Standard), CoinState::default(), false, &config);
        let json = serde_json::to_value(&board).unwrap();
        let a = &json["slots"][0];
        assert_eq!(a["slotId"], "A");
        assert_eq!(a["code"], "Fi");
        assert_eq!(a["rank"], 1);
        assert_eq!(a["activePosition"]["x"], 75.0);
        assert_eq!(a["fontSize"], 20.0);
        assert_eq!(json["coins"]["middleFlipped"], false);
    }
}
