use crate::row::RowModel;
use crate::types::Phase;

/// A row as laid out on the visible track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackRow {
    /// Rows above the exit boundary; 0 is the next row to exit
    pub depth: usize,
    pub row: RowModel,
}

/// Everything a view needs to draw one frame.
///
/// `rows` is ordered bottom-up and holds the visible rows plus the row
/// partially entering at the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub episode: u32,
    pub offset: u64,
    pub rows_crossed: u64,
    pub padding_bottom: u64,
    pub sub_row_offset: u32,
    pub row_height: u32,
    pub column_count: usize,
    pub visible_row_count: usize,
    pub rows: Vec<TrackRow>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.score = 0;
        self.episode = 0;
        self.offset = 0;
        self.rows_crossed = 0;
        self.padding_bottom = 0;
        self.sub_row_offset = 0;
        self.row_height = 0;
        self.column_count = 0;
        self.visible_row_count = 0;
        self.rows.clear();
    }
}
