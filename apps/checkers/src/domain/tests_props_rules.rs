// Property-based tests for the standard rules engine.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::engine::StandardRules;
use crate::domain::rules::RulesProvider;
use crate::domain::types::Side;
use crate::domain::{test_gens, test_prelude};

/// Play `mv` hop by hop through the incremental API.
fn play(rules: &mut StandardRules, mv: &crate::domain::Move) {
    for hop in &mv.hops {
        rules.commit_partial_move(mv.piece, *hop).unwrap();
    }
    rules.commit_finished_move(mv.piece, mv).unwrap();
    rules.toggle_active_side();
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the incremental API and the full-move listing agree.
    /// The first hop of every full legal move is a fresh destination of its
    /// piece, and every fresh destination starts some full legal move.
    #[test]
    fn prop_first_hops_match_full_moves(board in test_gens::board(), side in test_gens::side()) {
        let rules = StandardRules::with_board(board, side);

        let from_moves: BTreeSet<_> = rules
            .legal_moves(side)
            .iter()
            .map(|mv| (mv.piece, mv.hops[0]))
            .collect();
        let from_destinations: BTreeSet<_> = rules
            .board()
            .pieces_of(side)
            .flat_map(|(_, piece)| {
                rules
                    .legal_destinations(piece.id, &[])
                    .into_iter()
                    .map(move |dest| (piece.id, dest))
            })
            .collect();

        prop_assert_eq!(from_moves, from_destinations);
        prop_assert_eq!(rules.has_legal_move(side), !rules.legal_moves(side).is_empty());
    }

    /// Property: capturing is compulsory.
    /// If any legal move captures, every legal move captures.
    #[test]
    fn prop_capture_is_mandatory(board in test_gens::board(), side in test_gens::side()) {
        let rules = StandardRules::with_board(board, side);
        let moves = rules.legal_moves(side);
        if moves.iter().any(|mv| mv.is_capture()) {
            prop_assert!(moves.iter().all(|mv| mv.is_capture()));
        }
    }

    /// Property: random playouts conserve material.
    /// Every piece that leaves the board is counted as a capture, and the
    /// side to move alternates after every finished move.
    #[test]
    fn prop_playout_conserves_pieces(choices in test_gens::move_choices(80)) {
        let mut rules = StandardRules::new();
        for choice in choices {
            let side = rules.active_side();
            let moves = rules.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()].clone();
            play(&mut rules, &mv);

            prop_assert_eq!(rules.active_side(), side.opponent());
            prop_assert!(!rules.move_in_progress());
            for s in Side::ALL {
                let lost = rules.captures_by(s.opponent()) as usize;
                prop_assert_eq!(rules.board().count(s) + lost, 12);
            }
        }
    }
}
