//! Selection mode and selected row range.

/// How the selection is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// A single line, highlighted across the full row by the host view.
    #[default]
    Line,
    /// A hunk or contiguous range, marked with the margin indicator glyph.
    HunkOrRange,
}

/// An inclusive range of rows in the flattened patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// First selected row.
    pub start: usize,
    /// Last selected row.
    pub end: usize,
}

impl SelectionRange {
    /// A range covering a single row.
    pub fn single(row: usize) -> Self {
        Self {
            start: row,
            end: row,
        }
    }

    /// Create a range; callers guarantee `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Whether `row` lies in `[start, end]`.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row <= self.end
    }
}

/// The selection state machine.
///
/// Knows nothing about the patch: bounds and selectability are checked by
/// [`PatchState`](super::PatchState) before a transition is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    range: Option<SelectionRange>,
}

impl Selection {
    /// Create a selection in line mode on `row`, or empty.
    pub fn new(row: Option<usize>) -> Self {
        Self {
            mode: SelectionMode::Line,
            range: row.map(SelectionRange::single),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Current range, `None` when nothing is selected.
    pub fn range(&self) -> Option<SelectionRange> {
        self.range
    }

    /// Switch to line mode. Does not move the selection.
    pub fn set_line_select_mode(&mut self) {
        self.mode = SelectionMode::Line;
    }

    /// Switch to hunk/range mode. Does not move the selection.
    pub fn set_hunk_or_range_mode(&mut self) {
        self.mode = SelectionMode::HunkOrRange;
    }

    /// Select a single row, keeping the current mode.
    pub fn select_line(&mut self, row: usize) {
        self.range = Some(SelectionRange::single(row));
    }

    /// Select a range and switch to hunk/range mode.
    pub fn select_range(&mut self, range: SelectionRange) {
        self.mode = SelectionMode::HunkOrRange;
        self.range = Some(range);
    }

    /// Whether the host should draw a full-row highlight.
    pub fn selecting_line(&self) -> bool {
        self.mode == SelectionMode::Line
    }

    /// `(start, end)` for cursor and range placement in the host view.
    pub fn selected_view_range(&self) -> (usize, usize) {
        self.range.map(|r| (r.start, r.end)).unwrap_or((0, 0))
    }
}
