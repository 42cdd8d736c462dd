//! Phase actions: the round cycle from setup through voting and back.

use rand::Rng;
use tracing::{debug, info};

use super::{log_transitions, GameFlowService};
use crate::domain::assignment;
use crate::domain::catalog::{find_category, random_category};
use crate::domain::game_transition::SessionLifecycleView;
use crate::domain::rules::{impostor_ceiling, MIN_PLAYERS};
use crate::domain::state::{Phase, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

enum CategoryPick<'a> {
    ById(&'a str),
    Random,
}

impl GameFlowService {
    /// Open the pre-round configuration screen.
    pub fn open_game_config(&mut self) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();

        if state.phase != Phase::Setup {
            return Err(DomainError::phase_mismatch(format!(
                "game config opens from setup, not {:?}",
                state.phase
            )));
        }
        state.phase = Phase::GameConfig;
        debug!("Transition: Setup -> GameConfig");
        Ok(())
    }

    /// Leave setup and head for category selection.
    ///
    /// Needs at least three seated players; the impostor target is clamped
    /// to the roster ceiling on the way out.
    pub fn start_game(&mut self) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        if !matches!(state.phase, Phase::Setup | Phase::GameConfig) {
            return Err(DomainError::phase_mismatch(format!(
                "start_game is a setup action, phase is {:?}",
                state.phase
            )));
        }
        if state.players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::RosterTooSmall,
                format!(
                    "need at least {MIN_PLAYERS} players, have {}",
                    state.players.len()
                ),
            ));
        }

        let ceiling = impostor_ceiling(state.players.len());
        if state.impostor_count > ceiling {
            state.impostor_count = ceiling;
        }

        state.phase = Phase::CategorySelect;
        info!(
            players = state.players.len(),
            impostor_count = state.impostor_count,
            "Game started"
        );
        log_transitions(&before, &state);
        Ok(())
    }

    /// Deal a round from the named category.
    pub fn select_category(&mut self, id: &str) -> Result<(), DomainError> {
        self.enter_round(CategoryPick::ById(id))
    }

    /// Deal a round from a uniformly drawn category.
    pub fn select_random_category(&mut self) -> Result<(), DomainError> {
        self.enter_round(CategoryPick::Random)
    }

    fn enter_round(&mut self, pick: CategoryPick<'_>) -> Result<(), DomainError> {
        let Self {
            session,
            rng,
            catalog,
            ..
        } = self;
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        if state.phase != Phase::CategorySelect {
            return Err(DomainError::phase_mismatch(format!(
                "categories are picked in CategorySelect, not {:?}",
                state.phase
            )));
        }

        let category = match pick {
            CategoryPick::ById(id) => find_category(catalog, id).ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Category, format!("no category with id {id}"))
            })?,
            CategoryPick::Random => random_category(catalog, rng).ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Category, "catalog is empty")
            })?,
        };

        assignment::assign_roles(&mut state, category, rng)?;
        state.current_player_index = 0;
        state.phase = Phase::RoleReveal;

        // The secret word stays out of the logs on purpose.
        info!(category = %category.id, "Round dealt");
        log_transitions(&before, &state);
        Ok(())
    }

    /// Advance the reveal walk; the last player's tap starts the round.
    pub fn next_player(&mut self) -> Result<(), DomainError> {
        let Self {
            session,
            rng,
            timer,
            ..
        } = self;
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        if state.phase != Phase::RoleReveal {
            return Err(DomainError::phase_mismatch(format!(
                "next_player drives the reveal walk, phase is {:?}",
                state.phase
            )));
        }
        state.require_current_player()?;

        let last = state.players.len() - 1;
        if state.current_player_index < last {
            state.current_player_index += 1;
            log_transitions(&before, &state);
            return Ok(());
        }

        // Reveal walk complete: draw who speaks first and start the clock.
        let start = rng.random_range(0..state.players.len());
        let starting_player = state.players[start].id;
        state.starting_player_id = Some(starting_player);
        state.current_player_index = start;
        state.phase = Phase::Playing;
        info!(starting_player, "Transition: RoleReveal -> Playing");

        // The timer takes its own lock to arm the countdown.
        drop(state);
        timer.start(session.clone());

        let state = session.lock();
        log_transitions(&before, &state);
        Ok(())
    }

    /// Record the table's vote and end the round.
    pub fn vote(&mut self, player_id: PlayerId) -> Result<(), DomainError> {
        let Self { session, timer, .. } = self;
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        if state.phase != Phase::Voting {
            return Err(DomainError::phase_mismatch(format!(
                "votes are cast in Voting, not {:?}",
                state.phase
            )));
        }
        if state.player_index(player_id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("no player with id {player_id}"),
            ));
        }

        state.voted_player_id = Some(player_id);
        state.phase = Phase::End;
        timer.stop();
        info!(voted_player = player_id, "Vote recorded");
        log_transitions(&before, &state);
        Ok(())
    }

    /// Close voting without a verdict and head back to category selection.
    pub fn end_voting(&mut self) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();

        if state.phase != Phase::Voting {
            return Err(DomainError::phase_mismatch(format!(
                "end_voting closes Voting, phase is {:?}",
                state.phase
            )));
        }
        state.phase = Phase::CategorySelect;
        debug!("Transition: Voting -> CategorySelect");
        Ok(())
    }

    /// Clear the finished round and line up the next one; roster is kept.
    pub fn reset_for_next_round(&mut self) -> Result<(), DomainError> {
        let session = self.session.clone();
        let mut state = session.lock();

        if state.phase != Phase::End {
            return Err(DomainError::phase_mismatch(format!(
                "reset_for_next_round leaves End, phase is {:?}",
                state.phase
            )));
        }
        state.clear_round_fields();
        state.phase = Phase::CategorySelect;
        debug!("Transition: End -> CategorySelect");
        Ok(())
    }

    /// Abandon whatever is happening and fall back to the main menu.
    ///
    /// Allowed from any phase; stops the countdown, clears round state,
    /// keeps the roster.
    pub fn main_menu(&mut self) -> Result<(), DomainError> {
        let Self { session, timer, .. } = self;
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        timer.stop();
        state.clear_round_fields();
        state.phase = Phase::Setup;
        info!("Returned to main menu");
        log_transitions(&before, &state);
        Ok(())
    }

    /// Abort the current round but stay in the round cycle.
    ///
    /// Allowed from any phase; stops the countdown and clears round state so
    /// category selection starts from a clean slate.
    pub fn cancel_round(&mut self) -> Result<(), DomainError> {
        let Self { session, timer, .. } = self;
        let mut state = session.lock();
        let before = SessionLifecycleView::capture(&state);

        timer.stop();
        state.clear_round_fields();
        state.phase = Phase::CategorySelect;
        info!("Round cancelled");
        log_transitions(&before, &state);
        Ok(())
    }
}
