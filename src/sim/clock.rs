//! Match countdown
//!
//! Ticks feed milliseconds into an accumulator; every time it reaches a full
//! second the countdown drops by one and the accumulator resets to zero (the
//! overshoot is discarded, so a second never "catches up").

use serde::{Deserialize, Serialize};

/// Countdown state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchClock {
    Running {
        /// Whole seconds left
        countdown: i32,
        /// Milliseconds accumulated toward the next second
        accumulator_ms: u32,
    },
    Ended,
}

/// What a clock advance produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Still inside the current second
    Pending,
    /// A second elapsed; carries the new countdown
    SecondElapsed(i32),
    /// Countdown reached zero
    Ended,
}

impl MatchClock {
    pub const MS_PER_SECOND: u32 = 1000;

    pub fn new(countdown: i32) -> Self {
        if countdown <= 0 {
            MatchClock::Ended
        } else {
            MatchClock::Running {
                countdown,
                accumulator_ms: 0,
            }
        }
    }

    pub fn countdown(&self) -> i32 {
        match self {
            MatchClock::Running { countdown, .. } => *countdown,
            MatchClock::Ended => 0,
        }
    }

    pub fn accumulator_ms(&self) -> u32 {
        match self {
            MatchClock::Running { accumulator_ms, .. } => *accumulator_ms,
            MatchClock::Ended => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, MatchClock::Running { .. })
    }

    /// Add one tick's worth of time
    pub fn advance(&mut self, interval_ms: u32) -> ClockEvent {
        let MatchClock::Running {
            countdown,
            accumulator_ms,
        } = self
        else {
            return ClockEvent::Ended;
        };

        *accumulator_ms += interval_ms;
        if *accumulator_ms < Self::MS_PER_SECOND {
            return ClockEvent::Pending;
        }

        *accumulator_ms = 0;
        *countdown -= 1;
        let remaining = *countdown;
        if remaining <= 0 {
            *self = MatchClock::Ended;
            ClockEvent::Ended
        } else {
            ClockEvent::SecondElapsed(remaining)
        }
    }
}
