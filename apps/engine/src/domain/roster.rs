//! Roster mutation: seating, removing, and the impostor-count invariant.

use crate::domain::rules::{clamp_round_duration, impostor_ceiling, valid_impostor_range};
use crate::domain::state::{Phase, Player, PlayerId, SessionState};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Roster mutation is a setup-time activity only.
fn require_setup_phase(state: &SessionState) -> Result<(), DomainError> {
    match state.phase {
        Phase::Setup | Phase::GameConfig => Ok(()),
        other => Err(DomainError::phase_mismatch(format!(
            "roster can only change during setup, not {other:?}"
        ))),
    }
}

/// Seat a new player at the end of the turn order.
///
/// The stored name is the trimmed input; a name that trims to nothing is
/// rejected. Returns the freshly minted id.
pub fn add_player(state: &mut SessionState, name: &str) -> Result<PlayerId, DomainError> {
    require_setup_phase(state)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::BlankPlayerName,
            "player name must not be blank",
        ));
    }

    let id = state.mint_player_id();
    state.players.push(Player {
        id,
        name: name.to_string(),
        is_impostor: false,
        clue: None,
    });
    Ok(id)
}

/// Unseat a player and re-establish the impostor-count invariant.
///
/// After removal the ceiling `min(3, max(1, len - 1))` is recomputed and the
/// requested count is clamped down to it, so players leaving mid-setup can
/// never strand an unsatisfiable impostor target.
pub fn remove_player(state: &mut SessionState, id: PlayerId) -> Result<(), DomainError> {
    require_setup_phase(state)?;

    let Some(index) = state.player_index(id) else {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player with id {id}"),
        ));
    };
    state.players.remove(index);

    let ceiling = impostor_ceiling(state.players.len());
    if state.impostor_count > ceiling {
        state.impostor_count = ceiling;
    }
    Ok(())
}

/// Set the requested impostor target for upcoming rounds.
///
/// Only 1..=3 is accepted; the roster-size cap is applied later, at round
/// start, so the target survives roster churn during setup.
pub fn set_impostor_count(state: &mut SessionState, count: usize) -> Result<(), DomainError> {
    require_setup_phase(state)?;

    if !valid_impostor_range().contains(&count) {
        return Err(DomainError::validation(
            ValidationKind::ImpostorCountOutOfRange,
            format!("impostor count {count} outside {:?}", valid_impostor_range()),
        ));
    }
    state.impostor_count = count;
    Ok(())
}

/// Set the round length, coercing out-of-range requests into the bounds.
///
/// Unlike the other setters this one never rejects a value in-phase:
/// duration is a dial, not a rule.
pub fn set_round_duration(state: &mut SessionState, secs: u32) -> Result<(), DomainError> {
    require_setup_phase(state)?;

    state.round_duration = clamp_round_duration(secs);
    Ok(())
}
