#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::round::RoundConfig;
pub use domain::catalog::{Category, Word, CATEGORIES};
pub use domain::player_view::{RoleCard, SessionSnapshot};
pub use domain::state::{Phase, Player, PlayerId, SessionState, TickOutcome};
pub use errors::domain::{DomainError, NotFoundKind, ValidationKind};
pub use services::game_flow::GameFlowService;
pub use state::session_handle::SessionHandle;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
