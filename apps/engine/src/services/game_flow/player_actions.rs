//! Roster actions: everything a table does before a game starts.

use tracing::info;

use super::{log_transitions, GameFlowService};
use crate::domain::game_transition::SessionLifecycleView;
use crate::domain::roster;
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Seat a new player; returns the minted id.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        let id = roster::add_player(&mut state, name)?;
        info!(player_id = id, "Player seated");
        log_transitions(&before, &state);
        Ok(id)
    }

    /// Unseat a player; the impostor target is re-clamped to the new roster.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        roster::remove_player(&mut state, id)?;
        info!(
            player_id = id,
            impostor_count = state.impostor_count,
            "Player unseated"
        );
        log_transitions(&before, &state);
        Ok(())
    }

    /// Set the requested impostor target (1..=3).
    pub fn set_impostor_count(&mut self, count: usize) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();

        roster::set_impostor_count(&mut state, count)?;
        info!(impostor_count = count, "Impostor target set");
        Ok(())
    }

    /// Set the round length; out-of-range values are coerced into bounds.
    pub fn set_round_duration(&mut self, secs: u32) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();

        roster::set_round_duration(&mut state, secs)?;
        info!(round_duration = state.round_duration, "Round duration set");
        Ok(())
    }
}
