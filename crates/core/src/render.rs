//! Renderer notifications
//!
//! The controller pushes state changes out through [`Renderer`]. It never
//! reads anything back, so a renderer can draw, log, or record without
//! affecting game correctness.

use crate::types::Phase;

/// Side-effecting callbacks the controller invokes. All default to no-ops.
pub trait Renderer {
    /// A ring slot was regenerated with a new active column.
    fn on_row_recycled(&mut self, _row: usize, _active_column: usize) {}

    fn on_score_changed(&mut self, _score: u32) {}

    /// The session ended. Fired once per session.
    fn on_game_over(&mut self) {}

    /// The cumulative scroll offset moved.
    fn on_offset_changed(&mut self, _offset: u64) {}

    fn on_phase_changed(&mut self, _phase: Phase) {}
}

/// Renderer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    RowRecycled { row: usize, active_column: usize },
    ScoreChanged(u32),
    GameOver,
    OffsetChanged(u64),
    PhaseChanged(Phase),
}

/// Renderer that records notifications in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RenderEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, RenderEvent> {
        self.events.drain(..)
    }

    pub fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for EventLog {
    fn on_row_recycled(&mut self, row: usize, active_column: usize) {
        self.events.push(RenderEvent::RowRecycled { row, active_column });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.events.push(RenderEvent::ScoreChanged(score));
    }

    fn on_game_over(&mut self) {
        self.events.push(RenderEvent::GameOver);
    }

    fn on_offset_changed(&mut self, offset: u64) {
        self.events.push(RenderEvent::OffsetChanged(offset));
    }

    fn on_phase_changed(&mut self, phase: Phase) {
        self.events.push(RenderEvent::PhaseChanged(phase));
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_row_recycled(&mut self, row: usize, active_column: usize) {
        (**self).on_row_recycled(row, active_column);
    }

    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over();
    }

    fn on_offset_changed(&mut self, offset: u64) {
        (**self).on_offset_changed(offset);
    }

    fn on_phase_changed(&mut self, phase: Phase) {
        (**self).on_phase_changed(phase);
    }
}
