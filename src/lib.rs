use log::{debug, info};
use std::rc::Rc;
use yew::Reducible;

/// Default timer parameters
pub mod defaults {
    pub const LIMIT_MINUTES: u32 = 25;
    pub const MIN_LIMIT_MINUTES: u32 = 1;
    pub const TICK_INTERVAL_MS: u32 = 1000;
}

// Status text shown under the clock
pub const RUNNING_LABEL: &str = "Running";
pub const PAUSED_LABEL: &str = "Paused";

/// User actions and the recurring tick that drive the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    ToggleStartPause,
    Tick,
    Reset,
    IncreaseLimit,
    DecreaseLimit,
}

/// Complete state of the digital timer.
///
/// Invariants kept by [`TimerState::apply`]:
/// - `elapsed_seconds <= limit_minutes * 60`
/// - `limit_minutes >= 1`
/// - `limit_minutes` only changes while `elapsed_seconds == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub is_running: bool,
    pub elapsed_seconds: u32,
    pub limit_minutes: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            is_running: false,
            elapsed_seconds: 0,
            limit_minutes: defaults::LIMIT_MINUTES,
        }
    }
}

impl TimerState {
    pub fn limit_seconds(&self) -> u32 {
        self.limit_minutes.saturating_mul(60)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.limit_seconds().saturating_sub(self.elapsed_seconds)
    }

    pub fn is_completed(&self) -> bool {
        self.elapsed_seconds == self.limit_seconds()
    }

    /// Limit buttons are locked once the countdown has progressed.
    pub fn limit_locked(&self) -> bool {
        self.elapsed_seconds > 0
    }

    /// Compute the state that follows `action`.
    pub fn apply(&self, action: TimerAction) -> TimerState {
        let next = match action {
            TimerAction::ToggleStartPause => self.toggle_start_pause(),
            TimerAction::Tick => self.tick(),
            TimerAction::Reset => self.reset(),
            TimerAction::IncreaseLimit => self.increase_limit(),
            TimerAction::DecreaseLimit => self.decrease_limit(),
        };
        debug!("{:?}: {:?} -> {:?}", action, self, next);
        next
    }

    fn toggle_start_pause(&self) -> TimerState {
        let mut next = *self;
        if next.is_completed() {
            next.elapsed_seconds = 0;
        }
        next.is_running = !next.is_running;
        if next.is_running {
            info!("Timer started with {} remaining", format_remaining(&next));
        } else {
            info!("Timer paused at {}", format_remaining(&next));
        }
        next
    }

    fn tick(&self) -> TimerState {
        // Late ticks from a cancelled interval must not move the clock.
        if !self.is_running {
            return *self;
        }

        let mut next = *self;
        if next.elapsed_seconds < next.limit_seconds() {
            next.elapsed_seconds += 1;
        }
        if next.is_completed() {
            next.is_running = false;
            info!("Timer completed after {} minute(s)", next.limit_minutes);
        }
        next
    }

    fn reset(&self) -> TimerState {
        info!("Timer reset");
        TimerState::default()
    }

    fn increase_limit(&self) -> TimerState {
        if self.limit_locked() {
            return *self;
        }
        TimerState {
            limit_minutes: self.limit_minutes.saturating_add(1),
            ..*self
        }
    }

    fn decrease_limit(&self) -> TimerState {
        if self.limit_locked() || self.limit_minutes <= defaults::MIN_LIMIT_MINUTES {
            return *self;
        }
        TimerState {
            limit_minutes: self.limit_minutes - 1,
            ..*self
        }
    }
}

impl Reducible for TimerState {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // Same Rc means no re-render
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Format the time left on the clock as `MM:SS`.
pub fn format_remaining(state: &TimerState) -> String {
    format_seconds_to_minsec(state.remaining_seconds())
}

/// Format a number of seconds as zero-padded `MM:SS`.
pub fn format_seconds_to_minsec(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

pub fn status_label(state: &TimerState) -> &'static str {
    if state.is_running {
        RUNNING_LABEL
    } else {
        PAUSED_LABEL
    }
}
