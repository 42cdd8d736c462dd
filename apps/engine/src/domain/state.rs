use serde::{Deserialize, Serialize};

use crate::config::round::RoundConfig;
use crate::domain::rules::{DEFAULT_IMPOSTOR_COUNT, DEFAULT_ROUND_SECS};
use crate::errors::domain::DomainError;

/// Creation-time monotonic token; identity of a player within a session.
pub type PlayerId = u64;

/// Session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Roster assembly before anything else happens.
    Setup,
    /// Optional pre-round configuration stop (impostor count, timer).
    GameConfig,
    /// Host picks the category for the upcoming round.
    CategorySelect,
    /// Players look at their role cards one by one, in turn order.
    RoleReveal,
    /// Describing turns are running and the countdown is live.
    Playing,
    /// Countdown expired; the table votes.
    Voting,
    /// Vote recorded. Not terminal: the cycle restarts from here.
    End,
}

/// One seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_impostor: bool,
    /// The clue shown on this player's role card for the current round.
    pub clue: Option<String>,
}

/// Entire session container, sufficient for every engine operation.
///
/// There is exactly one of these per running game, created once in `Setup`
/// and owned by whoever drives the engine (see `SessionHandle`). Roster and
/// configuration survive round resets; everything round-scoped is cleared by
/// [`SessionState::clear_round_fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Seated players; vector order is turn order.
    pub players: Vec<Player>,
    /// Current phase of the session.
    pub phase: Phase,
    /// Whose card is showing in `RoleReveal` / whose turn opened `Playing`.
    pub current_player_index: usize,
    /// Category picked for the current round.
    pub selected_category_id: Option<String>,
    /// Secret word for the current round.
    pub selected_word: Option<String>,
    /// Primary clue shown to every non-impostor.
    pub selected_clue: Option<String>,
    /// Round length in seconds, always within the legal bounds.
    pub round_duration: u32,
    /// Seconds remaining on the live countdown.
    pub time_left: u32,
    /// Player voted out, once the table has voted.
    pub voted_player_id: Option<PlayerId>,
    /// Randomly drawn player who opens the describing turns.
    pub starting_player_id: Option<PlayerId>,
    /// Requested impostor target (1..=3); capped per roster size at round start.
    pub impostor_count: usize,
    /// Id fountain for [`Player::id`].
    pub(crate) next_player_id: PlayerId,
}

/// What a single countdown tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown not running (phase is not `Playing`).
    Idle,
    /// One second elapsed; the round keeps going.
    Ticked { time_left: u32 },
    /// Countdown hit zero and fired the `Playing -> Voting` transition.
    Expired,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            phase: Phase::Setup,
            current_player_index: 0,
            selected_category_id: None,
            selected_word: None,
            selected_clue: None,
            round_duration: DEFAULT_ROUND_SECS,
            time_left: 0,
            voted_player_id: None,
            starting_player_id: None,
            impostor_count: DEFAULT_IMPOSTOR_COUNT,
            next_player_id: 1,
        }
    }

    pub fn with_config(config: &RoundConfig) -> Self {
        let mut state = Self::new();
        state.round_duration = config.round_duration_secs;
        state.impostor_count = config.impostor_count;
        state
    }

    /// Hand out the next player id.
    pub(crate) fn mint_player_id(&mut self) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn require_current_player(&self) -> Result<&Player, DomainError> {
        self.players.get(self.current_player_index).ok_or_else(|| {
            DomainError::validation(
                crate::errors::domain::ValidationKind::Other("NO_CURRENT_PLAYER".into()),
                format!(
                    "current_player_index {} out of bounds for roster of {}",
                    self.current_player_index,
                    self.players.len()
                ),
            )
        })
    }

    /// Clear everything scoped to a single round.
    ///
    /// Roster, requested impostor count and round duration survive; word,
    /// clues, impostor flags, vote, starting player and turn cursor do not.
    pub fn clear_round_fields(&mut self) {
        self.selected_category_id = None;
        self.selected_word = None;
        self.selected_clue = None;
        self.voted_player_id = None;
        self.starting_player_id = None;
        self.current_player_index = 0;
        self.time_left = 0;
        for player in &mut self.players {
            player.is_impostor = false;
            player.clue = None;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// This is the only mutation of `time_left` after a round starts; the
    /// timer task calls it once per real second, tests call it directly to
    /// simulate time. Reaching zero fires the `Playing -> Voting` transition.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Idle;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        }
        if self.time_left == 0 {
            self.phase = Phase::Voting;
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked {
            time_left: self.time_left,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
