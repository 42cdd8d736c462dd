//! Unit tests for the pure pieces of the round lifecycle: the countdown
//! transition and round-field clearing.

use crate::domain::state::{Phase, SessionState, TickOutcome};
use crate::domain::test_state_helpers::{roster_of, session_in};

fn playing_with_duration(players: usize, duration: u32) -> SessionState {
    let mut state = session_in(Phase::Playing, players);
    state.round_duration = duration;
    state.time_left = duration;
    state
}

#[test]
fn sixty_ticks_run_a_sixty_second_round_down() {
    let mut state = playing_with_duration(3, 60);

    for tick_no in 1..60 {
        assert_eq!(
            state.tick(),
            TickOutcome::Ticked {
                time_left: 60 - tick_no
            }
        );
        assert_eq!(state.phase, Phase::Playing);
    }

    // The sixtieth tick lands on zero and fires the transition.
    assert_eq!(state.tick(), TickOutcome::Expired);
    assert_eq!(state.phase, Phase::Voting);
    assert_eq!(state.time_left, 0);
}

#[test]
fn ticks_after_expiry_are_idle_and_decrement_nothing() {
    let mut state = playing_with_duration(3, 60);
    while state.tick() != TickOutcome::Expired {}

    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.time_left, 0);
    assert_eq!(state.phase, Phase::Voting);
}

#[test]
fn tick_outside_playing_is_idle() {
    for phase in [
        Phase::Setup,
        Phase::GameConfig,
        Phase::CategorySelect,
        Phase::RoleReveal,
        Phase::Voting,
        Phase::End,
    ] {
        let mut state = session_in(phase, 3);
        state.time_left = 30;
        assert_eq!(state.tick(), TickOutcome::Idle, "phase {phase:?}");
        assert_eq!(state.time_left, 30);
    }
}

#[test]
fn tick_on_an_already_empty_clock_expires_immediately() {
    let mut state = session_in(Phase::Playing, 3);
    state.time_left = 0;
    assert_eq!(state.tick(), TickOutcome::Expired);
    assert_eq!(state.phase, Phase::Voting);
}

#[test]
fn clearing_round_fields_keeps_roster_and_config() {
    let mut state = roster_of(4);
    state.impostor_count = 2;
    state.round_duration = 90;
    state.phase = Phase::End;
    state.selected_category_id = Some("frutas".into());
    state.selected_word = Some("Manzana".into());
    state.selected_clue = Some("Roja".into());
    state.voted_player_id = Some(state.players[1].id);
    state.starting_player_id = Some(state.players[2].id);
    state.current_player_index = 2;
    state.time_left = 17;
    state.players[0].is_impostor = true;
    state.players[0].clue = Some("Dulce".into());
    state.players[1].clue = Some("Roja".into());

    state.clear_round_fields();

    assert_eq!(state.players.len(), 4);
    assert_eq!(state.impostor_count, 2);
    assert_eq!(state.round_duration, 90);
    assert_eq!(state.selected_category_id, None);
    assert_eq!(state.selected_word, None);
    assert_eq!(state.selected_clue, None);
    assert_eq!(state.voted_player_id, None);
    assert_eq!(state.starting_player_id, None);
    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.time_left, 0);
    assert!(state.players.iter().all(|p| !p.is_impostor));
    assert!(state.players.iter().all(|p| p.clue.is_none()));
}

#[test]
fn current_player_lookup_respects_bounds() {
    let mut state = session_in(Phase::RoleReveal, 3);
    state.current_player_index = 2;
    assert!(state.require_current_player().is_ok());

    state.current_player_index = 3;
    assert!(state.require_current_player().is_err());
}
