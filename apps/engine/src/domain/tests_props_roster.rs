//! Property tests for roster mutation (pure domain, no runtime).
//!
//! Contract under test:
//! - Player ids never collide, whatever the join/leave order.
//! - After any sequence of joins and leaves the impostor target sits in
//!   `1..=min(3, max(1, len - 1))`.
//! - The stored target never exceeds 3 even when callers push at the bounds.

use proptest::prelude::*;

use crate::domain::roster::{add_player, remove_player, set_impostor_count};
use crate::domain::rules::impostor_ceiling;
use crate::domain::state::SessionState;
use crate::domain::test_prelude;

/// One scripted roster mutation. Indices are taken modulo the live roster so
/// every script stays meaningful whatever the interleaving.
#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    SetCount(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..5).prop_map(Op::SetCount),
    ]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: ids are unique for every join/leave interleaving.
    #[test]
    fn prop_player_ids_never_collide(ops in prop::collection::vec(op(), 0..40)) {
        let mut state = SessionState::new();
        for op in ops {
            match op {
                Op::Add => {
                    add_player(&mut state, "Jugadora").unwrap();
                }
                Op::Remove(pick) => {
                    if !state.players.is_empty() {
                        let id = state.players[pick % state.players.len()].id;
                        remove_player(&mut state, id).unwrap();
                    }
                }
                Op::SetCount(_) => {}
            }

            let mut ids: Vec<_> = state.players.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), state.players.len(), "duplicate player id");
        }
    }

    /// Property: joins and leaves keep the impostor target inside the
    /// roster's ceiling.
    #[test]
    fn prop_join_leave_keeps_impostor_invariant(
        seats in 0usize..8,
        leaves in prop::collection::vec(0usize..8, 0..8),
        target in 1usize..=3,
    ) {
        let mut state = SessionState::new();
        for i in 0..seats {
            add_player(&mut state, &format!("P{i}")).unwrap();
        }
        // Target is set while the roster is at full strength; leaves must
        // re-establish the invariant on their own.
        let _ = set_impostor_count(&mut state, target);

        for pick in leaves {
            if state.players.is_empty() {
                break;
            }
            let id = state.players[pick % state.players.len()].id;
            remove_player(&mut state, id).unwrap();

            let ceiling = impostor_ceiling(state.players.len());
            prop_assert!(state.impostor_count >= 1);
            prop_assert!(state.impostor_count <= 3);
            prop_assert!(
                state.impostor_count <= ceiling,
                "count {} over ceiling {} with {} players",
                state.impostor_count, ceiling, state.players.len()
            );
        }
    }

    /// Property: the stored target is always 1..=3 whatever callers request.
    #[test]
    fn prop_stored_target_stays_in_configured_bounds(
        requests in prop::collection::vec(0usize..10, 1..20),
    ) {
        let mut state = SessionState::new();
        for i in 0..5 {
            add_player(&mut state, &format!("P{i}")).unwrap();
        }
        for request in requests {
            let _ = set_impostor_count(&mut state, request);
            prop_assert!((1..=3).contains(&state.impostor_count));
        }
    }
}
