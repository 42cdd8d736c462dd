//! Game flow orchestration service - the action surface over the session.
//!
//! This service provides fine-grained action methods for session state
//! progression. Callers invoke an action, the domain layer validates and
//! mutates, and observers read the session afterwards; rejected actions
//! return a typed reason and leave state untouched.

mod player_actions;
mod round_lifecycle;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::domain::catalog::{Category, CATEGORIES};
use crate::domain::game_transition::{derive_session_transitions, SessionLifecycleView};
use crate::domain::player_view::{self, RoleCard, SessionSnapshot};
use crate::domain::state::{PlayerId, SessionState};
use crate::errors::domain::DomainError;
use crate::infra::timer::RoundTimer;
use crate::state::session_handle::SessionHandle;

/// Drives one session: owns the timer, the RNG and the catalog; borrows the
/// session through its handle.
pub struct GameFlowService {
    session: SessionHandle,
    timer: RoundTimer,
    rng: StdRng,
    catalog: Vec<Category>,
}

impl GameFlowService {
    /// Create a service over `session`.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional RNG seed for deterministic behavior
    pub fn new(session: SessionHandle, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            session,
            timer: RoundTimer::default(),
            rng,
            catalog: CATEGORIES.clone(),
        }
    }

    /// Replace the built-in word catalog.
    pub fn with_catalog(mut self, catalog: Vec<Category>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Public snapshot of the current state for rendering.
    pub fn snapshot(&self) -> Result<SessionSnapshot, DomainError> {
        player_view::snapshot(&self.session.lock())
    }

    /// The private card a single player may look at.
    pub fn role_card(&self, player_id: PlayerId) -> Result<RoleCard, DomainError> {
        player_view::role_card(&self.session.lock(), player_id)
    }

    /// Whether the round countdown task is live.
    pub fn timer_active(&self) -> bool {
        self.timer.is_active()
    }
}

/// Log every edge the last action produced.
pub(super) fn log_transitions(before: &SessionLifecycleView, state: &SessionState) {
    let after = SessionLifecycleView::capture(state);
    for transition in derive_session_transitions(before, &after) {
        debug!(?transition, "Session transition");
    }
}
