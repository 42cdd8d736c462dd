//! Player-facing views of the session: private role cards and a public,
//! serializable snapshot for rendering.
//!
//! The snapshot never carries another player's allegiance or clue while a
//! round is live; the role card is the only channel for private data and is
//! scoped to a single player.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Phase, PlayerId, SessionState};
use crate::errors::domain::{DomainError, NotFoundKind};

/// One player's private card for the current round.
///
/// Deliberately omits the impostor flag: a player only ever sees a clue (or
/// the absence of one), never their own allegiance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    pub player_id: PlayerId,
    pub name: String,
    pub clue: Option<String>,
}

/// Look up the card `player_id` is allowed to see.
///
/// Only meaningful while a round is live (reveal through voting).
pub fn role_card(state: &SessionState, player_id: PlayerId) -> Result<RoleCard, DomainError> {
    match state.phase {
        Phase::RoleReveal | Phase::Playing | Phase::Voting => {}
        other => {
            return Err(DomainError::phase_mismatch(format!(
                "no role cards outside a live round (phase {other:?})"
            )))
        }
    }
    let player = state
        .players
        .iter()
        .find(|p| p.id == player_id)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("no player with id {player_id}"))
        })?;
    Ok(RoleCard {
        player_id: player.id,
        name: player.name.clone(),
        clue: player.clue.clone(),
    })
}

/// Public info about a single seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
}

/// Session-level header present in all snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub players: Vec<PlayerPublic>,
    pub impostor_count: usize,
    pub round_duration: u32,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup,
    GameConfig,
    CategorySelect,
    RoleReveal(RevealSnapshot),
    Playing(PlayingSnapshot),
    Voting(VotingSnapshot),
    End(EndSnapshot),
}

/// Whose card is on screen during the reveal walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSnapshot {
    pub showing: PlayerPublic,
    /// 0-based position in the reveal order.
    pub position: usize,
    pub roster_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub time_left: u32,
    pub starting_player: Option<PlayerPublic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSnapshot {
    pub candidates: Vec<PlayerPublic>,
}

/// End-of-round reveal; the one place allegiances go public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSnapshot {
    pub voted_player: Option<PlayerPublic>,
    pub voted_was_impostor: Option<bool>,
    pub word: Option<String>,
    pub impostors: Vec<PlayerPublic>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionHeader,
    pub phase: PhaseSnapshot,
}

fn public(player: &crate::domain::state::Player) -> PlayerPublic {
    PlayerPublic {
        id: player.id,
        name: player.name.clone(),
    }
}

/// Build the public snapshot for the current state.
pub fn snapshot(state: &SessionState) -> Result<SessionSnapshot, DomainError> {
    let header = SessionHeader {
        players: state.players.iter().map(public).collect(),
        impostor_count: state.impostor_count,
        round_duration: state.round_duration,
    };

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup,
        Phase::GameConfig => PhaseSnapshot::GameConfig,
        Phase::CategorySelect => PhaseSnapshot::CategorySelect,
        Phase::RoleReveal => {
            let showing = state.require_current_player()?;
            PhaseSnapshot::RoleReveal(RevealSnapshot {
                showing: public(showing),
                position: state.current_player_index,
                roster_size: state.players.len(),
            })
        }
        Phase::Playing => PhaseSnapshot::Playing(PlayingSnapshot {
            time_left: state.time_left,
            starting_player: state
                .starting_player_id
                .and_then(|id| state.players.iter().find(|p| p.id == id))
                .map(public),
        }),
        Phase::Voting => PhaseSnapshot::Voting(VotingSnapshot {
            candidates: state.players.iter().map(public).collect(),
        }),
        Phase::End => {
            let voted = state
                .voted_player_id
                .and_then(|id| state.players.iter().find(|p| p.id == id));
            PhaseSnapshot::End(EndSnapshot {
                voted_player: voted.map(public),
                voted_was_impostor: voted.map(|p| p.is_impostor),
                word: state.selected_word.clone(),
                impostors: state
                    .players
                    .iter()
                    .filter(|p| p.is_impostor)
                    .map(public)
                    .collect(),
            })
        }
    };

    Ok(SessionSnapshot {
        session: header,
        phase,
    })
}
