//! The round countdown: a single cancellable periodic tick task.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::domain::state::TickOutcome;
use crate::state::session_handle::SessionHandle;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to the countdown task for one round.
///
/// At most one task is ever live: `start` always cancels the previous one
/// before spawning. The spawned task is the only writer of `time_left`; it
/// cancels itself once the countdown fires the voting transition.
#[derive(Debug, Default)]
pub struct RoundTimer {
    cancel: Option<CancellationToken>,
    handle: Option<JoinHandle<()>>,
}

impl RoundTimer {
    /// Arm the countdown: reset `time_left` to the full round duration and
    /// start ticking once per second.
    ///
    /// Must run inside a tokio runtime.
    pub fn start(&mut self, session: SessionHandle) {
        self.stop();

        {
            let mut state = session.lock();
            state.time_left = state.round_duration;
            debug!(time_left = state.time_left, "Countdown armed");
        }

        let token = CancellationToken::new();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(TICK_PERIOD);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval yields immediately on its first tick; swallow it so
            // the first decrement lands a full period after arming.
            ticks.tick().await;
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = ticks.tick() => {
                        match session.lock().tick() {
                            TickOutcome::Ticked { time_left } => {
                                trace!(time_left, "Countdown tick");
                            }
                            TickOutcome::Expired => {
                                debug!("Countdown expired; Transition: Playing -> Voting");
                                break;
                            }
                            // The phase moved on without us being stopped;
                            // there is nothing left to count down.
                            TickOutcome::Idle => break,
                        }
                    }
                }
            }
        });

        self.cancel = Some(token);
        self.handle = Some(handle);
    }

    /// Cancel the tick task, if any. Idempotent: stopping an idle timer is a
    /// no-op and `time_left` is left untouched.
    pub fn stop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.handle = None;
    }

    /// Whether a countdown task is currently installed and running.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
