//! Round configuration from the host environment.
//!
//! Everything has a sane default; hosts only set variables to override. Out
//! of range values are coerced into the legal bounds rather than rejected,
//! so a misconfigured table still gets a playable game.

use std::env;

use crate::domain::rules::{
    clamp_round_duration, valid_impostor_range, DEFAULT_IMPOSTOR_COUNT, DEFAULT_ROUND_SECS,
    MAX_IMPOSTORS,
};

/// Initial session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// Round length in seconds, within the legal bounds.
    pub round_duration_secs: u32,
    /// Requested impostor target, within 1..=3.
    pub impostor_count: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: DEFAULT_ROUND_SECS,
            impostor_count: DEFAULT_IMPOSTOR_COUNT,
        }
    }
}

impl RoundConfig {
    /// Read overrides from the environment.
    ///
    /// `IMPOSTOR_ROUND_SECS` sets the round length, `IMPOSTOR_COUNT` the
    /// impostor target. Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            round_duration_secs: clamp_round_duration(
                parsed_var("IMPOSTOR_ROUND_SECS").unwrap_or(DEFAULT_ROUND_SECS),
            ),
            impostor_count: parsed_var::<usize>("IMPOSTOR_COUNT")
                .map(|n| n.clamp(*valid_impostor_range().start(), MAX_IMPOSTORS))
                .unwrap_or(DEFAULT_IMPOSTOR_COUNT),
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.trim().parse().ok()
}
