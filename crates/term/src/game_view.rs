//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also performs the inverse mapping from
//! a terminal position back to a track cell, using the same geometry it
//! draws with, so a click always lands on the cell the player sees.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangles of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    /// Track interior size in terminal cells
    pub track_w: u16,
    pub track_h: u16,
    /// Row of the score readout (above the frame)
    pub score_y: u16,
    /// Row of the start prompt / status line (below the frame)
    pub prompt_y: u16,
}

impl Layout {
    pub fn frame_w(&self) -> u16 {
        self.track_w.saturating_add(2)
    }

    pub fn frame_h(&self) -> u16 {
        self.track_h.saturating_add(2)
    }

    pub fn interior_x(&self) -> u16 {
        self.frame_x.saturating_add(1)
    }

    pub fn interior_y(&self) -> u16 {
        self.frame_y.saturating_add(1)
    }
}

/// Clamp a count to terminal coordinates.
fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// What a screen position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A track cell: ring slot and column
    Cell { row: usize, column: usize },
    /// The start prompt below the track
    StartControl,
    Outside,
}

const START_PROMPT: &str = "[ Enter: start ]";
const RUNNING_HINT: &str = "click tiles or d f j k";
const GAME_OVER_TEXT: &str = " GAME OVER ";
const RESTART_HINT: &str = "[ r: restart  q: quit ]";

const TILE_ACTIVE: CellStyle = CellStyle::new(Rgb::gray(235), Rgb::gray(15));
const TILE_CLEARED: CellStyle = CellStyle::new(Rgb::gray(60), Rgb::gray(150));
const TILE_EVEN: CellStyle = CellStyle::new(Rgb::gray(40), Rgb::gray(235));
const TILE_ODD: CellStyle = CellStyle::new(Rgb::gray(40), Rgb::gray(215));
const BORDER: CellStyle = CellStyle::new(Rgb::gray(200), Rgb::gray(0));
const TEXT: CellStyle = CellStyle::new(Rgb::gray(220), Rgb::gray(0));
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(170, 30, 30)).bold();

/// A lightweight terminal view of the scrolling track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Track row height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square on typical terminal glyphs.
        Self {
            cell_w: 6,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Geometry of the frame for `snap`, centered in `viewport`.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        // Oversized tracks saturate and are clipped by the framebuffer.
        let track_w = clamp_u16(snap.column_count).saturating_mul(self.cell_w);
        let track_h = clamp_u16(snap.visible_row_count).saturating_mul(self.cell_h);
        // score line + frame + prompt line
        let total_h = track_h.saturating_add(4);
        let frame_x = viewport.width.saturating_sub(track_w.saturating_add(2)) / 2;
        let score_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = score_y.saturating_add(1);
        Layout {
            frame_x,
            frame_y,
            track_w,
            track_h,
            score_y,
            prompt_y: frame_y.saturating_add(track_h).saturating_add(2),
        }
    }

    /// Track depth shown on interior row `ty` (0 = top of the track).
    ///
    /// Samples the middle of the terminal row in logical pixels, measured up
    /// from the exit boundary and shifted by the scroll within the current row.
    fn depth_at(&self, snap: &GameSnapshot, layout: &Layout, ty: u16) -> Option<usize> {
        if ty >= layout.track_h || snap.row_height == 0 {
            return None;
        }
        let rh = snap.row_height as u64;
        let ch = self.cell_h as u64;
        let from_bottom = (layout.track_h - 1 - ty) as u64;
        // Everything scaled by 2 * cell_h to stay in integers.
        let sample = from_bottom * rh * 2 + rh + snap.sub_row_offset as u64 * 2 * ch;
        Some((sample / (rh * 2 * ch)) as usize)
    }

    /// Map a terminal position to what the player sees there.
    pub fn target_at(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Target {
        let layout = self.layout(snap, viewport);

        if y == layout.prompt_y && snap.phase == Phase::Idle {
            let len = clamp_u16(START_PROMPT.chars().count());
            let px = layout
                .frame_x
                .saturating_add(layout.frame_w().saturating_sub(len) / 2);
            if x >= px && x < px.saturating_add(len) {
                return Target::StartControl;
            }
        }

        let (ix, iy) = (layout.interior_x(), layout.interior_y());
        if x < ix
            || y < iy
            || x >= ix.saturating_add(layout.track_w)
            || y >= iy.saturating_add(layout.track_h)
        {
            return Target::Outside;
        }
        let column = ((x - ix) / self.cell_w) as usize;
        let Some(depth) = self.depth_at(snap, &layout, y - iy) else {
            return Target::Outside;
        };
        match snap.rows.iter().find(|r| r.depth == depth) {
            Some(track_row) => Target::Cell {
                row: track_row.row.index(),
                column,
            },
            None => Target::Outside,
        }
    }

    /// Convenience wrapper returning only track cells.
    pub fn cell_at(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        match self.target_at(snap, viewport, x, y) {
            Target::Cell { row, column } => Some((row, column)),
            _ => None,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap, viewport);

        fb.put_centered(
            layout.frame_x,
            layout.frame_w(),
            layout.score_y,
            &format!("Score: {}", snap.score),
            TEXT.bold(),
        );

        self.draw_border(fb, &layout);
        self.draw_track(fb, snap, &layout);

        match snap.phase {
            Phase::Idle => {
                fb.put_centered(
                    layout.frame_x,
                    layout.frame_w(),
                    layout.prompt_y,
                    START_PROMPT,
                    TEXT.bold(),
                );
            }
            Phase::Running => {
                fb.put_centered(
                    layout.frame_x,
                    layout.frame_w(),
                    layout.prompt_y,
                    RUNNING_HINT,
                    TEXT,
                );
            }
            Phase::GameOver => {
                let mid = layout.interior_y().saturating_add(layout.track_h / 2);
                fb.put_centered(
                    layout.interior_x(),
                    layout.track_w,
                    mid,
                    GAME_OVER_TEXT,
                    BANNER,
                );
                fb.put_centered(
                    layout.frame_x,
                    layout.frame_w(),
                    layout.prompt_y,
                    RESTART_HINT,
                    TEXT,
                );
            }
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_track(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let (ix, iy) = (layout.interior_x(), layout.interior_y());
        // Only columns whose left edge is on screen are drawn.
        let columns = snap
            .column_count
            .min(usize::from(layout.track_w / self.cell_w))
            .min(usize::from(fb.width().saturating_sub(ix).div_ceil(self.cell_w)));
        let rows = layout.track_h.min(fb.height().saturating_sub(iy));
        for ty in 0..rows {
            let row = self
                .depth_at(snap, layout, ty)
                .and_then(|depth| snap.rows.iter().find(|r| r.depth == depth))
                .map(|r| r.row);
            for column in 0..columns {
                let style = match row {
                    Some(row) if row.is_active(column) && row.tapped() => TILE_CLEARED,
                    Some(row) if row.is_active(column) => TILE_ACTIVE,
                    _ if column % 2 == 0 => TILE_EVEN,
                    _ => TILE_ODD,
                };
                let x = ix.saturating_add(clamp_u16(column) * self.cell_w);
                fb.fill_rect(x, iy + ty, self.cell_w, 1, ' ', style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x0, y0) = (layout.frame_x, layout.frame_y);
        let x1 = x0.saturating_add(layout.frame_w() - 1);
        let y1 = y0.saturating_add(layout.frame_h() - 1);

        fb.set(x0, y0, '┌', BORDER);
        fb.set(x1, y0, '┐', BORDER);
        fb.set(x0, y1, '└', BORDER);
        fb.set(x1, y1, '┘', BORDER);
        for x in x0 + 1..x1.min(fb.width()) {
            fb.set(x, y0, '─', BORDER);
            fb.set(x, y1, '─', BORDER);
        }
        for y in y0 + 1..y1.min(fb.height()) {
            fb.set(x0, y, '│', BORDER);
            fb.set(x1, y, '│', BORDER);
        }
    }
}
