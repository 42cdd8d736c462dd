//! Domain layer: pure session logic, no runtime or I/O.

pub mod assignment;
pub mod catalog;
pub mod game_transition;
pub mod player_view;
pub mod roster;
pub mod rules;
pub mod state;

#[cfg(test)]
mod test_prelude;

#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_props_roster;

// Re-exports for ergonomics
pub use assignment::assign_roles;
pub use catalog::{find_category, random_category, Category, Word, CATEGORIES};
pub use game_transition::{derive_session_transitions, SessionLifecycleView, SessionTransition};
pub use player_view::{role_card, snapshot, RoleCard, SessionSnapshot};
pub use rules::{actual_impostor_count, impostor_ceiling, MIN_PLAYERS};
pub use state::{Phase, Player, PlayerId, SessionState, TickOutcome};
