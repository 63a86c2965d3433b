//! Event queue - serializes ticks and taps in arrival order
//!
//! Ticks and taps are enqueued as they happen and resolved one at a time,
//! so a tap that arrives before a recycle is judged against the old row and
//! a tap that arrives after it is judged against the regenerated row.

use std::collections::VecDeque;

use crate::timer::TimerToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Start,
    /// Periodic tick produced by the schedule identified by the token
    Tick(TimerToken),
    Tap { row: usize, column: usize },
    /// Tap `column` on whichever row is lowest and still untapped when the
    /// event is resolved
    TapLane { column: usize },
    Restart,
}

/// FIFO of pending game events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn push_tap(&mut self, row: usize, column: usize) {
        self.push(GameEvent::Tap { row, column });
    }

    pub fn push_lane(&mut self, column: usize) {
        self.push(GameEvent::TapLane { column });
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = EventQueue::new();
        q.push(GameEvent::Start);
        q.push_tap(2, 1);
        q.push_lane(3);
        q.push(GameEvent::Restart);
        assert_eq!(q.len(), 4);
        assert_eq!(q.pop(), Some(GameEvent::Start));
        assert_eq!(q.pop(), Some(GameEvent::Tap { row: 2, column: 1 }));
        assert_eq!(q.pop(), Some(GameEvent::TapLane { column: 3 }));
        assert_eq!(q.pop(), Some(GameEvent::Restart));
        assert!(q.pop().is_none());
        assert!(q.is_empty());
    }
}
