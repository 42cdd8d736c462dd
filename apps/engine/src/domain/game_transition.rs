use crate::domain::state::{Phase, PlayerId, SessionState};

/// Cheap before/after capture of the facts transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLifecycleView {
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    pub roster: Vec<PlayerId>,
}

impl SessionLifecycleView {
    pub fn capture(state: &SessionState) -> Self {
        let turn = match state.phase {
            Phase::RoleReveal | Phase::Playing => state
                .players
                .get(state.current_player_index)
                .map(|p| p.id),
            _ => None,
        };
        Self {
            phase: state.phase,
            turn,
            roster: state.players.iter().map(|p| p.id).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Edge-triggered: setup finished, the round cycle begins.
    GameStarted,

    /// Edge-triggered: roles dealt, reveal walk begins.
    RoundStarted,

    /// Edge-triggered: the showing/acting seat became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: describing turns and the countdown began.
    PlayStarted,

    /// Edge-triggered: the countdown expired (or play otherwise ended).
    VotingStarted,

    /// Edge-triggered: a vote was recorded and the round is over.
    RoundEnded,

    /// Edge-triggered: the session fell back to the main menu.
    ReturnedToSetup,

    /// Explicit: a player took a seat.
    PlayerJoined { player_id: PlayerId },

    /// Explicit: a player left their seat.
    PlayerLeft { player_id: PlayerId },
}

/// Derive session transitions from before/after lifecycle state.
pub fn derive_session_transitions(
    before: &SessionLifecycleView,
    after: &SessionLifecycleView,
) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    // 1. Roster churn
    for &id in &after.roster {
        if !before.roster.contains(&id) {
            transitions.push(SessionTransition::PlayerJoined { player_id: id });
        }
    }
    for &id in &before.roster {
        if !after.roster.contains(&id) {
            transitions.push(SessionTransition::PlayerLeft { player_id: id });
        }
    }

    // 2. Phase edges
    if after.phase != before.phase {
        match after.phase {
            Phase::CategorySelect
                if matches!(before.phase, Phase::Setup | Phase::GameConfig) =>
            {
                transitions.push(SessionTransition::GameStarted)
            }
            Phase::RoleReveal => transitions.push(SessionTransition::RoundStarted),
            Phase::Playing => transitions.push(SessionTransition::PlayStarted),
            Phase::Voting => transitions.push(SessionTransition::VotingStarted),
            Phase::End => transitions.push(SessionTransition::RoundEnded),
            Phase::Setup => transitions.push(SessionTransition::ReturnedToSetup),
            _ => {}
        }
    }

    // 3. Turn change
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(SessionTransition::TurnBecame { player_id });
        }
    }

    transitions
}
