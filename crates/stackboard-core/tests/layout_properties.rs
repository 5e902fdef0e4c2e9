use stackboard_core::StackboardError;
use stackboard_core::board::{
    Board, BoardOptions, CoinPair, CoinState, Column, column_of, layout,
};
use stackboard_core::config::LayoutConfig;
use stackboard_core::function::CognitiveFunction::{self, *};
use stackboard_core::stack::{PersonalityType, Slot, Stack, Variant, generate_stack};
use std::collections::HashSet;

const VARIANTS: [Variant; 2] = [Variant::Standard, Variant::Jumper];

fn all_stacks() -> impl Iterator<Item = Stack> {
    PersonalityType::all().flat_map(|t| VARIANTS.into_iter().map(move |v| Stack::for_type(t, v)))
}

fn all_coin_states() -> [CoinState; 4] {
    let base = CoinState::default();
    [
        base,
        base.toggled(CoinPair::Outer),
        base.toggled(CoinPair::Inner),
        base.toggled(CoinPair::Outer).toggled(CoinPair::Inner),
    ]
}

#[test]
fn test_opposite_involution() {
    for f in CognitiveFunction::all() {
        assert_eq!(f.opposite().opposite(), f);
        assert_ne!(f.opposite(), f);
    }
}

#[test]
fn test_stack_well_formedness() {
    for ty in PersonalityType::all() {
        for variant in VARIANTS {
            let stack = generate_stack(&ty.to_string(), variant).unwrap();
            stack.validate().unwrap();

            let codes: HashSet<_> = stack.functions().iter().map(|f| f.code).collect();
            assert_eq!(codes.len(), 4);
            assert_eq!(stack.get(Slot::A).code.opposite(), stack.get(Slot::D).code);
            assert_eq!(stack.get(Slot::B).code.opposite(), stack.get(Slot::C).code);
        }
    }
}

#[test]
fn test_savior_invariant() {
    for stack in all_stacks() {
        let saviors: Vec<Slot> = stack.saviors().map(|f| f.slot).collect();
        assert_eq!(saviors.len(), 2);
        assert!(stack.get(Slot::A).is_savior);
        assert!(!stack.get(Slot::D).is_savior);
        match stack.variant {
            Variant::Standard => assert_eq!(saviors, [Slot::A, Slot::B]),
            Variant::Jumper => assert_eq!(saviors, [Slot::A, Slot::C]),
        }
    }
}

#[test]
fn test_radius_ordering_in_both_modes() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        for compact in [false, true] {
            let board = layout(&stack, CoinState::initial(&stack), compact, &config);
            let r = |slot| board.get(slot).radius;
            assert!(r(Slot::A) > r(Slot::B));
            assert_eq!(r(Slot::B), r(Slot::C));
            assert!(r(Slot::C) > r(Slot::D));
            if compact {
                let font = |slot| board.get(slot).font_size;
                assert!(font(Slot::A) > font(Slot::B));
                assert!(font(Slot::C) > font(Slot::D));
            }
        }
    }
}

#[test]
fn test_double_flip_restores_positions_exactly() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        for compact in [false, true] {
            for coins in all_coin_states() {
                let before = layout(&stack, coins, compact, &config);
                for pair in [CoinPair::Outer, CoinPair::Inner] {
                    let after =
                        layout(&stack, coins.toggled(pair).toggled(pair), compact, &config);
                    assert_eq!(before, after);
                }
            }
        }
    }
}

#[test]
fn test_flip_only_moves_its_own_pair() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        for coins in all_coin_states() {
            let before = layout(&stack, coins, false, &config);
            let outer = layout(&stack, coins.toggled(CoinPair::Outer), false, &config);
            let inner = layout(&stack, coins.toggled(CoinPair::Inner), false, &config);
            for slot in [Slot::B, Slot::C] {
                assert_eq!(before.get(slot), outer.get(slot));
            }
            for slot in [Slot::A, Slot::D] {
                assert_eq!(before.get(slot), inner.get(slot));
            }
        }
    }
}

#[test]
fn test_middle_columns_are_stable() {
    let config = LayoutConfig::default();
    let g = config.geometry;
    for stack in all_stacks() {
        let unflipped = layout(&stack, CoinState::default(), false, &config);
        let flipped = layout(&stack, CoinState::default().toggled(CoinPair::Inner), false, &config);
        for slot in [Slot::B, Slot::C] {
            assert_eq!(unflipped.active(slot).x, flipped.active(slot).x);
            assert_ne!(unflipped.active(slot).y, flipped.active(slot).y);

            let expected_x = match column_of(stack.get(slot).code) {
                Column::Left => g.inner_left_top.x,
                Column::Right => g.inner_right_top.x,
            };
            assert_eq!(unflipped.active(slot).x, expected_x);
        }
        assert_ne!(unflipped.active(Slot::B), unflipped.active(Slot::C));
        assert_ne!(flipped.active(Slot::B), flipped.active(Slot::C));
    }
}

#[test]
fn test_outer_pair_always_on_opposite_diagonals() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        for coins in all_coin_states() {
            let board = layout(&stack, coins, false, &config);
            let (a, d) = (board.active(Slot::A), board.active(Slot::D));
            assert_ne!(a.x, d.x);
            assert!(a.y < d.y);
        }
    }
}

#[test]
fn test_hiding_ghosts_never_moves_active_shapes() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        for compact in [false, true] {
            for coins in all_coin_states() {
                let board = |show_ghosts| {
                    let mut b = Board::new(
                        stack.clone(),
                        BoardOptions {
                            compact,
                            show_ghosts,
                            ..BoardOptions::default()
                        },
                    );
                    for pair in [CoinPair::Outer, CoinPair::Inner] {
                        if b.coins().is_flipped(pair) != coins.is_flipped(pair) {
                            b.toggle(pair);
                        }
                    }
                    assert_eq!(b.coins(), coins);
                    b.layout(&config)
                };
                let (shown, hidden) = (board(true), board(false));
                assert!(shown.ghosts_visible);
                assert!(!hidden.ghosts_visible);
                for slot in Slot::ALL {
                    assert_eq!(shown.active(slot), hidden.active(slot));
                    assert_eq!(shown.ghost(slot), hidden.ghost(slot));
                }
            }
        }
    }
}

#[test]
fn test_scenario_infp_standard() {
    let config = LayoutConfig::default();
    let g = config.geometry;
    let stack = generate_stack("INFP", Variant::Standard).unwrap();

    let summary: Vec<_> = stack.functions().iter().map(|f| (f.slot, f.code, f.is_savior)).collect();
    assert_eq!(
        summary,
        [
            (Slot::A, Fi, true),
            (Slot::B, Ne, true),
            (Slot::C, Si, false),
            (Slot::D, Te, false),
        ]
    );

    let board = Board::new(stack, BoardOptions::default());
    assert_eq!(board.coins(), CoinState::default());
    let layout = board.layout(&config);
    assert_eq!(layout.active(Slot::A), g.hero_left);
    assert_eq!(layout.active(Slot::D), g.demon_right);
    assert_eq!(layout.active(Slot::B), g.inner_right_top);
    assert_eq!(layout.active(Slot::C), g.inner_left_bottom);
}

#[test]
fn test_scenario_infp_jumper_defaults_middle_flipped() {
    let config = LayoutConfig::default();
    let g = config.geometry;
    let stack = generate_stack("infp", Variant::Jumper).unwrap();
    let summary: Vec<_> = stack.functions().iter().map(|f| (f.code, f.is_savior)).collect();
    assert_eq!(summary, [(Fi, true), (Ne, false), (Si, true), (Te, false)]);

    let board = Board::new(stack, BoardOptions::default());
    assert!(board.coins().middle_flipped);
    assert!(!board.coins().outer_flipped);

    let layout = board.layout(&config);
    assert_eq!(layout.active(Slot::A), g.hero_left);
    assert_eq!(layout.active(Slot::C), g.inner_left_top);
    assert_eq!(layout.active(Slot::B), g.inner_right_bottom);
    assert_eq!(layout.active(Slot::D), g.demon_right);
}

#[test]
fn test_savior_middle_function_opens_on_top_row() {
    let config = LayoutConfig::default();
    for stack in all_stacks() {
        let layout = layout(&stack, CoinState::initial(&stack), false, &config);
        let savior = stack.saviors().find(|f| !f.slot.is_outer()).unwrap().slot;
        let demon = if savior == Slot::B { Slot::C } else { Slot::B };
        assert!(
            layout.active(savior).y < layout.active(demon).y,
            "{} {:?}: savior {savior:?} should start on top",
            stack.personality_type,
            stack.variant
        );
    }
}

#[test]
fn test_scenario_outer_toggle_on_infp_standard() {
    let config = LayoutConfig::default();
    let g = config.geometry;
    let mut board = Board::new(
        generate_stack("INFP", Variant::Standard).unwrap(),
        BoardOptions::default(),
    );
    let before = board.layout(&config);

    assert!(board.toggle(CoinPair::Outer));
    let after = board.layout(&config);

    assert_eq!(before.active(Slot::A), g.hero_left);
    assert_eq!(after.active(Slot::A), g.hero_right);
    assert_eq!(before.active(Slot::D), g.demon_right);
    assert_eq!(after.active(Slot::D), g.demon_left);
    assert_eq!(before.get(Slot::B), after.get(Slot::B));
    assert_eq!(before.get(Slot::C), after.get(Slot::C));
}

#[test]
fn test_unknown_type_fails_cleanly() {
    let err = generate_stack("ZZZZ", Variant::Standard).unwrap_err();
    assert!(matches!(err, StackboardError::UnknownType { ref code } if code == "ZZZZ"));
}

#[test]
fn test_independent_boards_do_not_share_coins() {
    let stack = generate_stack("ENFJ", Variant::Standard).unwrap();
    let mut left = Board::new(stack.clone(), BoardOptions::default());
    let right = Board::new(stack, BoardOptions::default());
    left.toggle(CoinPair::Outer);
    assert!(left.coins().outer_flipped);
    assert!(!right.coins().outer_flipped);
}
