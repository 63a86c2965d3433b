//! Game controller - owns the lifecycle, the score, and every piece of game state
//!
//! The controller is the single entry point for the front end:
//!
//! - [`GameController::start`] arms the periodic tick
//! - [`GameController::tick`] / [`GameController::advance`] scroll the track
//! - [`GameController::tap`] judges a tap
//! - [`GameController::tap_lane`] judges a tap on the lowest untapped row
//! - [`GameController::restart`] resets everything back to `Idle`
//!
//! Ticks and taps can also be funneled through an [`EventQueue`] and resolved
//! with [`GameController::drain`], which preserves arrival order.
//!
//! `phase` is written only by the transitions in this file. Once the game is
//! over, no tick or tap mutates the score or the grid until a restart.

use tracing::{debug, info, warn};

use crate::config::{ConfigError, ConfigExt};
use crate::event::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::hit::{HitTester, MissReason, Verdict};
use crate::render::{NullRenderer, Renderer};
use crate::rng::SimpleRng;
use crate::scroll::ScrollEngine;
use crate::snapshot::{GameSnapshot, TrackRow};
use crate::timer::{TickTimer, TimerToken};
use crate::types::{GameConfig, Phase};

/// Result of [`GameController::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// `Idle -> Running`
    Started,
    /// Already running; the tick schedule was replaced
    Rearmed,
    /// Game over; only a restart leaves this phase
    Rejected,
}

/// Result of one periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Inactive,
    /// The tick came from a cancelled or replaced schedule
    Stale,
    /// The track moved without crossing a row boundary
    Scrolled,
    /// A cleared row exited and its slot was regenerated
    Recycled { row: usize, active_column: usize },
    /// An untapped row exited; the game is over
    Expired { row: usize },
}

/// Result of [`GameController::tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not running; taps outside a session have no effect
    Ignored,
    Hit { row: usize, score: u32 },
    /// The tap ended the game
    Miss(MissReason),
}

/// Result of resolving one queued [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Start(StartOutcome),
    Tick(TickOutcome),
    Tap(TapOutcome),
    Restarted,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndReason {
    Expired(usize),
    Missed(MissReason),
}

#[derive(Debug, Clone)]
pub struct GameController<R: Renderer = NullRenderer> {
    config: GameConfig,
    grid: Grid,
    engine: ScrollEngine,
    timer: TickTimer,
    phase: Phase,
    score: u32,
    /// Increments on every restart.
    episode: u32,
    renderer: R,
}

impl GameController<NullRenderer> {
    /// Controller without a renderer (headless use and tests).
    pub fn headless(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, seed, NullRenderer)
    }
}

impl<R: Renderer> GameController<R> {
    /// Validate `config` and build the grid, engine, and (disarmed) timer.
    pub fn new(config: GameConfig, seed: u32, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(&config, SimpleRng::new(seed));
        debug!(
            rows = config.row_count,
            columns = config.column_count,
            visible = config.visible_row_count,
            seed,
            "grid generated"
        );

        Ok(Self {
            engine: ScrollEngine::new(&config),
            timer: TickTimer::new(config.tick_interval_ms),
            grid,
            config,
            phase: Phase::Idle,
            score: 0,
            episode: 0,
            renderer,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Score readout shown next to the track.
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Start the game, or re-arm the tick schedule if it is already running.
    pub fn start(&mut self) -> StartOutcome {
        match self.phase {
            Phase::Idle => {
                self.timer.arm();
                self.set_phase(Phase::Running);
                info!(episode = self.episode, "game started");
                StartOutcome::Started
            }
            Phase::Running => {
                self.timer.arm();
                debug!("start while running; tick schedule re-armed");
                StartOutcome::Rearmed
            }
            Phase::GameOver => {
                warn!("start rejected after game over; restart first");
                StartOutcome::Rejected
            }
        }
    }

    /// Run one periodic tick.
    ///
    /// Checks the phase first, so a tick that was already dequeued when the
    /// game ended does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Inactive;
        }

        let crossing = self.engine.tick();
        self.renderer.on_offset_changed(self.engine.offset());

        let Some(crossing) = crossing else {
            return TickOutcome::Scrolled;
        };

        let row = crossing.exiting_index;
        let tapped = self.grid.row(row).is_some_and(|r| r.tapped());
        if !tapped {
            self.end_game(EndReason::Expired(row));
            return TickOutcome::Expired { row };
        }

        match self.grid.recycle(row) {
            Some(fresh) => {
                debug!(
                    row,
                    active_column = fresh.active_column(),
                    rows_crossed = crossing.rows_crossed,
                    "row recycled"
                );
                self.renderer.on_row_recycled(row, fresh.active_column());
                TickOutcome::Recycled {
                    row,
                    active_column: fresh.active_column(),
                }
            }
            None => TickOutcome::Scrolled,
        }
    }

    /// Run a tick produced by the schedule identified by `token`.
    pub fn tick_scheduled(&mut self, token: TimerToken) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Inactive;
        }
        if !self.timer.accepts(token) {
            debug!(generation = token.generation(), "stale tick dropped");
            return TickOutcome::Stale;
        }
        self.tick()
    }

    /// Feed elapsed host time and run every tick that falls due.
    ///
    /// Returns the number of ticks that ran. Stops early if a tick ends the game.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            let Some(token) = self.timer.token() else {
                break;
            };
            if self.tick_scheduled(token) == TickOutcome::Inactive {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Feed elapsed host time and enqueue due ticks behind any pending input.
    ///
    /// Returns the number of ticks enqueued.
    pub fn schedule(&mut self, elapsed_ms: u32, queue: &mut EventQueue) -> u32 {
        let due = self.timer.advance(elapsed_ms);
        if let Some(token) = self.timer.token() {
            for _ in 0..due {
                queue.push(GameEvent::Tick(token));
            }
            due
        } else {
            0
        }
    }

    /// Judge a tap at `(row, column)`.
    ///
    /// Taps outside `Running` are ignored. While running, the active cell of
    /// an untapped row scores a point; anything else ends the game.
    pub fn tap(&mut self, row: usize, column: usize) -> TapOutcome {
        if !self.phase.is_running() {
            debug!(row, column, phase = self.phase.as_str(), "tap ignored");
            return TapOutcome::Ignored;
        }

        match HitTester::new(&self.grid).evaluate(row, column) {
            Verdict::Hit => {
                self.grid.mark_tapped(row);
                self.score = self.score.saturating_add(1);
                debug!(row, column, score = self.score, "hit");
                self.renderer.on_score_changed(self.score);
                TapOutcome::Hit {
                    row,
                    score: self.score,
                }
            }
            Verdict::Miss(reason) => {
                debug!(row, column, reason = reason.as_str(), "miss");
                self.end_game(EndReason::Missed(reason));
                TapOutcome::Miss(reason)
            }
        }
    }

    /// Tap `column` on the lowest row of the visible track still awaiting a tap.
    ///
    /// The row is looked up when the tap is resolved, so several lane taps
    /// queued in one frame walk up the track one row each. With every shown
    /// row already cleared there is nothing to tap and the tap is ignored.
    pub fn tap_lane(&mut self, column: usize) -> TapOutcome {
        if !self.phase.is_running() {
            debug!(column, phase = self.phase.as_str(), "lane tap ignored");
            return TapOutcome::Ignored;
        }
        match self.lowest_untapped_row() {
            Some(row) => self.tap(row, column),
            None => {
                debug!(column, "lane tap ignored; no row awaiting a tap");
                TapOutcome::Ignored
            }
        }
    }

    /// Ring slot of the lowest shown row that has not been tapped yet.
    pub fn lowest_untapped_row(&self) -> Option<usize> {
        let rows_crossed = self.engine.rows_crossed();
        (0..self.shown_rows())
            .map(|depth| self.grid.slot_at(rows_crossed, depth))
            .find(|&slot| self.grid.row(slot).is_some_and(|r| !r.tapped()))
    }

    /// Cancel the schedule, zero the score, regenerate every row, rewind the
    /// track, and return to `Idle`.
    pub fn restart(&mut self) {
        self.timer.disarm();
        self.score = 0;
        self.grid.reset();
        self.engine.reset();
        self.episode = self.episode.wrapping_add(1);

        self.renderer.on_score_changed(0);
        self.renderer.on_offset_changed(0);
        for row in self.grid.rows() {
            self.renderer.on_row_recycled(row.index(), row.active_column());
        }
        self.set_phase(Phase::Idle);
        info!(episode = self.episode, "game restarted");
    }

    /// Resolve one queued event.
    pub fn dispatch(&mut self, event: GameEvent) -> EventOutcome {
        match event {
            GameEvent::Start => EventOutcome::Start(self.start()),
            GameEvent::Tick(token) => EventOutcome::Tick(self.tick_scheduled(token)),
            GameEvent::Tap { row, column } => EventOutcome::Tap(self.tap(row, column)),
            GameEvent::TapLane { column } => EventOutcome::Tap(self.tap_lane(column)),
            GameEvent::Restart => {
                self.restart();
                EventOutcome::Restarted
            }
        }
    }

    /// Resolve every queued event in arrival order. Returns how many were handled.
    pub fn drain(&mut self, queue: &mut EventQueue) -> usize {
        let mut handled = 0;
        while let Some(event) = queue.pop() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.score = self.score;
        out.episode = self.episode;
        out.offset = self.engine.offset();
        out.rows_crossed = self.engine.rows_crossed();
        out.padding_bottom = self.engine.padding_bottom();
        out.sub_row_offset = self.engine.sub_row_offset();
        out.row_height = self.engine.row_height();
        out.column_count = self.grid.column_count();
        out.visible_row_count = self.grid.visible_row_count();

        out.rows.clear();
        for depth in 0..self.shown_rows() {
            let slot = self.grid.slot_at(out.rows_crossed, depth);
            if let Some(row) = self.grid.row(slot) {
                out.rows.push(TrackRow { depth, row: *row });
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Rows at least partly on screen.
    ///
    /// One extra row is showing while the track is between boundaries.
    fn shown_rows(&self) -> usize {
        let partial = usize::from(self.engine.sub_row_offset() > 0);
        (self.grid.visible_row_count() + partial).min(self.grid.len())
    }

    fn end_game(&mut self, reason: EndReason) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.timer.disarm();
        match reason {
            EndReason::Expired(row) => {
                info!(row, score = self.score, "game over: row scrolled past untapped")
            }
            EndReason::Missed(miss) => {
                info!(reason = miss.as_str(), score = self.score, "game over: missed tap")
            }
        }
        self.set_phase(Phase::GameOver);
        self.renderer.on_game_over();
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.renderer.on_phase_changed(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{EventLog, RenderEvent};

    fn controller(seed: u32) -> GameController<EventLog> {
        GameController::new(GameConfig::default(), seed, EventLog::new()).unwrap()
    }

    fn active(ctl: &GameController<EventLog>, row: usize) -> usize {
        ctl.grid().row(row).unwrap().active_column()
    }

    fn wrong(ctl: &GameController<EventLog>, row: usize) -> usize {
        (active(ctl, row) + 1) % ctl.config().column_count
    }

    fn assert_single_active(ctl: &GameController<EventLog>) {
        for row in ctl.grid().rows() {
            assert_eq!(row.cells().filter(|&c| c).count(), 1);
        }
    }

    #[test]
    fn test_new_controller_is_idle() {
        let ctl = controller(1);
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.score(), 0);
        assert!(!ctl.timer().is_armed());
        assert!(ctl.renderer().events().is_empty());
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = GameConfig {
            column_count: 1,
            ..GameConfig::default()
        };
        let err = GameController::headless(config, 1).unwrap_err();
        assert_eq!(err, ConfigError::TooFewColumns(1));
    }

    #[test]
    fn test_start_arms_timer() {
        let mut ctl = controller(1);
        assert_eq!(ctl.start(), StartOutcome::Started);
        assert_eq!(ctl.phase(), Phase::Running);
        assert!(ctl.timer().is_armed());
        assert_eq!(
            ctl.renderer().events(),
            &[RenderEvent::PhaseChanged(Phase::Running)]
        );
    }

    #[test]
    fn test_redundant_start_rearms() {
        let mut ctl = controller(1);
        ctl.start();
        let first = ctl.timer().token().unwrap();
        assert_eq!(ctl.start(), StartOutcome::Rearmed);
        let second = ctl.timer().token().unwrap();
        assert_ne!(first, second);
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.tick_scheduled(first), TickOutcome::Stale);
        assert_eq!(ctl.tick_scheduled(second), TickOutcome::Scrolled);
    }

    #[test]
    fn test_tick_before_start_is_inactive() {
        let mut ctl = controller(1);
        assert_eq!(ctl.tick(), TickOutcome::Inactive);
        assert_eq!(ctl.engine().offset(), 0);
    }

    #[test]
    fn test_tap_before_start_is_ignored() {
        let mut ctl = controller(1);
        let w = wrong(&ctl, 0);
        assert_eq!(ctl.tap(0, w), TapOutcome::Ignored);
        assert_eq!(ctl.tap(99, 99), TapOutcome::Ignored);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_hit_scores_and_marks_row() {
        let mut ctl = controller(3);
        ctl.start();
        let a = active(&ctl, 2);
        assert_eq!(ctl.tap(2, a), TapOutcome::Hit { row: 2, score: 1 });
        assert!(ctl.grid().row(2).unwrap().tapped());
        assert_eq!(ctl.score(), 1);
        assert_eq!(ctl.score_text(), "Score: 1");
        assert!(ctl
            .renderer()
            .events()
            .contains(&RenderEvent::ScoreChanged(1)));
    }

    #[test]
    fn test_wrong_column_ends_game() {
        let mut ctl = controller(3);
        ctl.start();
        let w = wrong(&ctl, 0);
        assert_eq!(ctl.tap(0, w), TapOutcome::Miss(MissReason::WrongColumn));
        assert_eq!(ctl.phase(), Phase::GameOver);
        assert!(!ctl.timer().is_armed());
    }

    #[test]
    fn test_second_tap_on_same_row_ends_game() {
        let mut ctl = controller(3);
        ctl.start();
        let a = active(&ctl, 1);
        ctl.tap(1, a);
        assert_eq!(ctl.tap(1, a), TapOutcome::Miss(MissReason::AlreadyTapped));
        assert_eq!(ctl.phase(), Phase::GameOver);
        assert_eq!(ctl.score(), 1);
    }

    #[test]
    fn test_out_of_range_tap_is_miss() {
        let mut ctl = controller(3);
        ctl.start();
        assert_eq!(ctl.tap(8, 0), TapOutcome::Miss(MissReason::OutOfRange));
        assert_eq!(ctl.phase(), Phase::GameOver);
    }

    #[test]
    fn test_cleared_row_is_recycled_at_boundary() {
        let mut ctl = controller(9);
        ctl.start();
        let a = active(&ctl, 0);
        ctl.tap(0, a);

        for _ in 0..9 {
            assert_eq!(ctl.tick(), TickOutcome::Scrolled);
        }
        match ctl.tick() {
            TickOutcome::Recycled { row, active_column } => {
                assert_eq!(row, 0);
                assert_eq!(active(&ctl, 0), active_column);
            }
            other => panic!("expected recycle, got {:?}", other),
        }
        assert_eq!(ctl.phase(), Phase::Running);
        assert!(!ctl.grid().row(0).unwrap().tapped());
        assert_single_active(&ctl);
    }

    #[test]
    fn test_untapped_row_expires_at_boundary() {
        let mut ctl = controller(9);
        ctl.start();
        for _ in 0..9 {
            ctl.tick();
        }
        assert_eq!(ctl.tick(), TickOutcome::Expired { row: 0 });
        assert_eq!(ctl.phase(), Phase::GameOver);

        let offset = ctl.engine().offset();
        assert_eq!(ctl.tick(), TickOutcome::Inactive);
        assert_eq!(ctl.engine().offset(), offset);
        let a = active(&ctl, 1);
        assert_eq!(ctl.tap(1, a), TapOutcome::Ignored);
        assert_eq!(ctl.score(), 0);
    }

    #[test]
    fn test_game_over_fires_once() {
        let mut ctl = controller(4);
        ctl.start();
        let w = wrong(&ctl, 0);
        ctl.tap(0, w);
        ctl.tap(0, w);
        ctl.tick();
        assert_eq!(ctl.start(), StartOutcome::Rejected);
        assert_eq!(
            ctl.renderer().count(|e| *e == RenderEvent::GameOver),
            1
        );
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut ctl = controller(4);
        ctl.start();
        let a = active(&ctl, 0);
        ctl.tap(0, a);
        for _ in 0..15 {
            ctl.tick();
        }
        let w = wrong(&ctl, 1);
        ctl.tap(1, w);
        assert_eq!(ctl.phase(), Phase::GameOver);

        ctl.restart();
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.score(), 0);
        assert_eq!(ctl.episode(), 1);
        assert_eq!(ctl.engine().offset(), 0);
        assert_eq!(ctl.engine().rows_crossed(), 0);
        assert!(!ctl.timer().is_armed());
        assert!(ctl.grid().rows().iter().all(|r| !r.tapped()));
        assert_single_active(&ctl);

        assert_eq!(ctl.start(), StartOutcome::Started);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut ctl = controller(5);
        assert_eq!(ctl.advance(1000), 0);
        ctl.start();
        assert_eq!(ctl.advance(49), 0);
        assert_eq!(ctl.advance(1), 1);
        assert_eq!(ctl.advance(200), 4);
        assert_eq!(ctl.engine().offset(), 50);
    }

    #[test]
    fn test_advance_stops_at_game_over() {
        let mut ctl = controller(5);
        ctl.start();
        // Twenty ticks are due but row 0 expires on the tenth.
        assert_eq!(ctl.advance(1000), 10);
        assert_eq!(ctl.phase(), Phase::GameOver);
        assert_eq!(ctl.engine().rows_crossed(), 1);
    }

    #[test]
    fn test_schedule_enqueues_behind_taps() {
        let mut ctl = controller(6);
        let mut queue = EventQueue::new();
        ctl.start();
        for _ in 0..9 {
            ctl.tick();
        }
        let a = active(&ctl, 0);
        queue.push_tap(0, a);
        assert_eq!(ctl.schedule(50, &mut queue), 1);
        assert_eq!(ctl.drain(&mut queue), 2);
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.score(), 1);
        assert_eq!(ctl.engine().rows_crossed(), 1);
    }

    #[test]
    fn test_queued_tick_after_game_over_is_inactive() {
        let mut ctl = controller(6);
        ctl.start();
        let token = ctl.timer().token().unwrap();
        let w = wrong(&ctl, 0);
        let mut queue = EventQueue::new();
        queue.push_tap(0, w);
        queue.push(GameEvent::Tick(token));
        ctl.drain(&mut queue);
        assert_eq!(ctl.phase(), Phase::GameOver);
        assert_eq!(ctl.engine().offset(), 0);
    }

    #[test]
    fn test_lane_taps_in_one_frame_climb_the_track() {
        let mut ctl = controller(10);
        ctl.start();
        let mut queue = EventQueue::new();
        let (first, second) = (active(&ctl, 0), active(&ctl, 1));
        queue.push_lane(first);
        queue.push_lane(second);
        ctl.drain(&mut queue);

        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.score(), 2);
        assert!(ctl.grid().row(1).unwrap().tapped());
        assert_eq!(ctl.lowest_untapped_row(), Some(2));
    }

    #[test]
    fn test_lane_tap_wrong_column_ends_game() {
        let mut ctl = controller(10);
        ctl.start();
        let w = wrong(&ctl, 0);
        assert_eq!(ctl.tap_lane(w), TapOutcome::Miss(MissReason::WrongColumn));
        assert_eq!(ctl.phase(), Phase::GameOver);
        assert_eq!(ctl.tap_lane(w), TapOutcome::Ignored);
    }

    #[test]
    fn test_lane_tap_with_every_shown_row_cleared_is_ignored() {
        let mut ctl = controller(11);
        assert_eq!(ctl.tap_lane(0), TapOutcome::Ignored);
        ctl.start();
        for row in 0..5 {
            let a = active(&ctl, row);
            ctl.tap_lane(a);
        }
        assert_eq!(ctl.score(), 5);
        assert_eq!(ctl.lowest_untapped_row(), None);
        assert_eq!(ctl.tap_lane(0), TapOutcome::Ignored);
        assert_eq!(ctl.phase(), Phase::Running);

        // Once the track moves, the partly shown sixth row becomes tappable.
        ctl.tick();
        assert_eq!(ctl.lowest_untapped_row(), Some(5));
    }

    #[test]
    fn test_offset_notifications_are_cumulative() {
        let mut ctl = controller(12);
        ctl.start();
        let a = active(&ctl, 0);
        ctl.tap(0, a);
        ctl.renderer_mut().clear();

        // Fifteen ticks cross the first boundary at tick ten.
        for _ in 0..15 {
            ctl.tick();
        }
        let offsets: Vec<u64> = ctl
            .renderer()
            .events()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::OffsetChanged(offset) => Some(*offset),
                _ => None,
            })
            .collect();
        let expected: Vec<u64> = (1..=15).map(|i| i * 10).collect();
        assert_eq!(offsets, expected);
        assert_eq!(ctl.engine().sub_row_offset(), 50);

        let w = wrong(&ctl, 1);
        ctl.tap(1, w);
        assert_eq!(ctl.renderer().events().last(), Some(&RenderEvent::GameOver));
        let len = ctl.renderer().events().len();
        ctl.tick();
        ctl.advance(500);
        assert_eq!(ctl.renderer().events().len(), len);
    }

    #[test]
    fn test_expiring_tick_reports_offset_before_game_over() {
        let mut ctl = controller(12);
        ctl.start();
        for _ in 0..10 {
            ctl.tick();
        }
        let events = ctl.renderer().events();
        let tail = &events[events.len() - 3..];
        assert_eq!(
            tail,
            &[
                RenderEvent::OffsetChanged(100),
                RenderEvent::PhaseChanged(Phase::GameOver),
                RenderEvent::GameOver,
            ]
        );
    }

    #[test]
    fn test_snapshot_lists_visible_rows_bottom_up() {
        let mut ctl = controller(7);
        let snap = ctl.snapshot();
        assert_eq!(snap.rows.len(), 5);
        let slots: Vec<usize> = snap.rows.iter().map(|r| r.row.index()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);

        ctl.start();
        ctl.tick();
        let snap = ctl.snapshot();
        assert_eq!(snap.sub_row_offset, 10);
        assert_eq!(snap.rows.len(), 6);
        assert_eq!(snap.rows[5].depth, 5);
        assert_eq!(snap.rows[5].row.index(), 5);
    }

    #[test]
    fn test_snapshot_after_recycle_starts_at_next_slot() {
        let mut ctl = controller(7);
        ctl.start();
        let a = active(&ctl, 0);
        ctl.tap(0, a);
        for _ in 0..10 {
            ctl.tick();
        }
        let snap = ctl.snapshot();
        assert_eq!(snap.rows_crossed, 1);
        assert_eq!(snap.padding_bottom, 100);
        assert_eq!(snap.rows[0].row.index(), 1);
        assert_eq!(snap.rows.len(), 5);
    }
}
