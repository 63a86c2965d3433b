//! Tick timer - the periodic scroll schedule
//!
//! The game runs on one logical thread, so the "timer" is a fixed-timestep
//! accumulator driven by the host clock. Each arm starts a new generation;
//! ticks carry the token of the generation that produced them, and a tick
//! whose token is no longer current is dropped by the controller.

/// Identifies one armed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    generation: u64,
    armed: bool,
}

impl TickTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0,
            generation: 0,
            armed: false,
        }
    }

    /// Arm the schedule, replacing any existing one.
    pub fn arm(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.accumulated_ms = 0;
        self.armed = true;
        TimerToken(self.generation)
    }

    /// Cancel the schedule. Returns `false` when it was already disarmed.
    pub fn disarm(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.accumulated_ms = 0;
        was_armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Token of the armed schedule, if any.
    pub fn token(&self) -> Option<TimerToken> {
        self.armed.then_some(TimerToken(self.generation))
    }

    /// Whether a tick carrying `token` belongs to the live schedule.
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.armed && token.0 == self.generation
    }

    /// Feed elapsed host time; returns how many ticks are now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed || self.interval_ms == 0 {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.interval_ms;
        self.accumulated_ms %= self.interval_ms;
        due
    }

    /// Milliseconds until the next tick is due (full interval while disarmed).
    pub fn until_next_ms(&self) -> u32 {
        if !self.armed {
            return self.interval_ms;
        }
        self.interval_ms.saturating_sub(self.accumulated_ms)
    }
}
