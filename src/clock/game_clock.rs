use std::time::Duration;

use log::debug;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::GameState;

/// Drives game ticks from a single repeating timer.
///
/// The timer is replaced, never adjusted, whenever the period changes, so a
/// shorter interval takes effect on the very next tick. Cancelling drops the
/// timer; a cancelled clock never fires again until it is re-armed.
pub struct GameClock {
    timer: Option<Interval>,
    period_ms: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            timer: None,
            period_ms: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Current period, if armed
    pub fn period_ms(&self) -> Option<u64> {
        self.timer.as_ref().map(|_| self.period_ms)
    }

    /// Cancel any running timer and start a new one firing every `period_ms`,
    /// first one period from now
    pub fn arm(&mut self, period_ms: u64) {
        let period = Duration::from_millis(period_ms);
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.timer = Some(timer);
        self.period_ms = period_ms;
        debug!("Clock armed at {}ms", period_ms);
    }

    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("Clock cancelled");
        }
    }

    /// Bring the clock in line with `state`: armed at its interval while it is
    /// running, cancelled otherwise. Returns true if the timer was re-armed.
    pub fn sync(&mut self, state: &GameState) -> bool {
        if !state.is_running() {
            self.cancel();
            return false;
        }

        if self.period_ms() == Some(state.tick_interval_ms) {
            return false;
        }

        self.arm(state.tick_interval_ms);
        true
    }

    /// Wait for the next tick. Never completes while cancelled.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
