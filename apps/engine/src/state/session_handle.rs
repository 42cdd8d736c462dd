//! Shared ownership handle for the session record.
//!
//! The session is created once, wrapped in a handle, and injected into
//! whatever needs it (the flow service, the timer task, a UI layer). There
//! is no ambient global; dropping every handle drops the session. Execution
//! is cooperative: every mutation happens under the one lock, so a tick and
//! a caller action can never interleave mid-mutation.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::round::RoundConfig;
use crate::domain::state::SessionState;

#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    pub fn new(state: SessionState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Fresh setup-phase session with the given configuration.
    pub fn with_config(config: &RoundConfig) -> Self {
        Self::new(SessionState::with_config(config))
    }

    /// Lock the session for one synchronous action.
    pub fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock()
    }

    /// Owned copy of the current state, for observers.
    pub fn state(&self) -> SessionState {
        self.inner.lock().clone()
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(SessionState::new())
    }
}
