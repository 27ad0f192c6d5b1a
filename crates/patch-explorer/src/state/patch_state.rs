//! Selection state over one patch snapshot.

use super::{calculate_origin, Selection, SelectionMode, SelectionRange};
use crate::action::ExplorerAction;
use crate::model::{HunkSpan, Patch, RowKind};
use crate::render::{format_range_plain, RenderOptions};
use log::debug;
use std::sync::Arc;
use thiserror::Error;

/// Errors for selection requests that do not fit the patch.
///
/// A rejected request leaves the selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No patch loaded")]
    NoPatch,
    #[error("Row {row} is out of range (patch has {total} rows)")]
    OutOfRange { row: usize, total: usize },
    #[error("Row {0} is a header row and cannot be selected")]
    NotSelectable(usize),
    #[error("Invalid range: start {start} is after end {end}")]
    InvertedRange { start: usize, end: usize },
    #[error("Hunk {0} does not exist or has no lines")]
    NoSuchHunk(usize),
}

/// Selection state for a patch.
///
/// Created when a patch snapshot is loaded and discarded when a new snapshot
/// replaces it.
#[derive(Debug, Clone)]
pub struct PatchState {
    /// The patch being explored.
    patch: Arc<Patch>,
    /// Kind of every row in the flattened patch.
    row_kinds: Vec<RowKind>,
    /// Row positions of every hunk.
    hunks: Vec<HunkSpan>,
    /// Mode and selected range.
    selection: Selection,
    /// Last known width of the host view.
    view_width: usize,
}

impl PatchState {
    /// Create state for a patch, selecting its first change line.
    pub fn new(patch: impl Into<Arc<Patch>>) -> Self {
        let patch = patch.into();
        let row_kinds = patch.row_kinds();
        let hunks = patch.hunk_spans();
        let first_change = row_kinds.iter().position(RowKind::is_change);

        Self {
            patch,
            row_kinds,
            hunks,
            selection: Selection::new(first_change),
            view_width: 0,
        }
    }

    /// The patch being explored.
    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    /// Number of rows in the flattened patch.
    pub fn line_count(&self) -> usize {
        self.row_kinds.len()
    }

    /// Current mode.
    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Current range, `None` when nothing is selected.
    pub fn selected_range(&self) -> Option<SelectionRange> {
        self.selection.range()
    }

    /// Last known view width.
    pub fn view_width(&self) -> usize {
        self.view_width
    }

    // === Selection state machine ===

    /// Switch to line mode. Does not move the selection.
    pub fn set_line_select_mode(&mut self) {
        self.selection.set_line_select_mode();
    }

    /// Switch to hunk/range mode. Does not move the selection.
    pub fn set_hunk_or_range_mode(&mut self) {
        self.selection.set_hunk_or_range_mode();
    }

    /// Select a single body row.
    pub fn select_line(&mut self, row: usize) -> Result<(), SelectionError> {
        self.validate_row(row)?;
        self.selection.select_line(row);
        Ok(())
    }

    /// Select rows `start..=end` in hunk/range mode.
    ///
    /// Both ends must be body rows; hunk headers may fall inside the range.
    pub fn select_range(&mut self, start: usize, end: usize) -> Result<(), SelectionError> {
        if start > end {
            return Err(SelectionError::InvertedRange { start, end });
        }
        self.validate_row(start)?;
        self.validate_row(end)?;
        self.selection.select_range(SelectionRange::new(start, end));
        Ok(())
    }

    /// Select every body row of a hunk in hunk/range mode.
    pub fn select_hunk(&mut self, hunk_index: usize) -> Result<(), SelectionError> {
        let body = self
            .hunks
            .get(hunk_index)
            .and_then(HunkSpan::body)
            .ok_or(SelectionError::NoSuchHunk(hunk_index))?;
        self.selection
            .select_range(SelectionRange::new(*body.start(), *body.end()));
        Ok(())
    }

    /// Whether the host should draw a full-row highlight.
    pub fn selecting_line(&self) -> bool {
        self.selection.selecting_line()
    }

    /// `(start, end)` for cursor and range placement in the host view.
    pub fn selected_view_range(&self) -> (usize, usize) {
        self.selection.selected_view_range()
    }

    // === Viewport ===

    /// Scroll origin keeping the selection visible.
    pub fn calculate_origin(
        &self,
        current_origin: usize,
        buffer_height: usize,
        total_lines: usize,
    ) -> usize {
        calculate_origin(current_origin, buffer_height, total_lines, self.selection.range())
    }

    /// Record a new view width.
    pub fn on_view_width_changed(&mut self, width: usize) {
        self.view_width = width;
    }

    // === Rendering inputs ===

    /// Options for a styled render.
    ///
    /// The selection is only shown while the view has focus.
    pub fn render_options(&self, included: &[usize], focused: bool) -> RenderOptions {
        RenderOptions {
            included: included.iter().copied().collect(),
            selection: self.selection.range().filter(|_| focused),
            mode: self.selection.mode(),
            view_width: self.view_width,
        }
    }

    /// The selected rows as plain text, ready to be applied as a patch
    /// fragment. Empty when nothing is selected.
    pub fn selected_plain_patch(&self) -> String {
        match self.selection.range() {
            Some(range) => format_range_plain(&self.patch, range.start, range.end),
            None => String::new(),
        }
    }

    // === Actions ===

    /// Apply an action to the selection.
    pub fn handle_action(&mut self, action: ExplorerAction) -> Result<(), SelectionError> {
        match action {
            ExplorerAction::SelectNext => match self.mode() {
                SelectionMode::Line => self.move_line(true),
                SelectionMode::HunkOrRange => self.move_hunk(true),
            },
            ExplorerAction::SelectPrev => match self.mode() {
                SelectionMode::Line => self.move_line(false),
                SelectionMode::HunkOrRange => self.move_hunk(false),
            },
            ExplorerAction::NextHunk => self.move_hunk(true),
            ExplorerAction::PrevHunk => self.move_hunk(false),
            ExplorerAction::SelectFirst => self.select_edge(true),
            ExplorerAction::SelectLast => self.select_edge(false),
            ExplorerAction::SelectLine(row) => return self.select_line(row),
            ExplorerAction::ExtendDown => self.extend(true),
            ExplorerAction::ExtendUp => self.extend(false),
            ExplorerAction::SelectRange { start, end } => return self.select_range(start, end),
            ExplorerAction::ToggleSelectMode => self.toggle_select_mode(),
            ExplorerAction::SetViewWidth(width) => self.on_view_width_changed(width),
        }
        Ok(())
    }

    fn validate_row(&self, row: usize) -> Result<(), SelectionError> {
        let total = self.row_kinds.len();
        match self.row_kinds.get(row) {
            None => Err(SelectionError::OutOfRange { row, total }),
            Some(kind) if !kind.is_selectable() => Err(SelectionError::NotSelectable(row)),
            Some(_) => Ok(()),
        }
    }

    /// Move to the adjacent change line.
    fn move_line(&mut self, forward: bool) {
        let target = match self.selection.range() {
            Some(range) if forward => {
                self.find_row(range.end + 1..self.line_count(), RowKind::is_change)
            }
            Some(range) => self.find_row((0..range.start).rev(), RowKind::is_change),
            None => self.find_row(0..self.line_count(), RowKind::is_change),
        };
        if let Some(row) = target {
            self.selection.select_line(row);
        }
    }

    /// Move to the adjacent hunk. Line mode lands on the hunk's first change
    /// line; hunk/range mode selects the whole hunk.
    fn move_hunk(&mut self, forward: bool) {
        let current = self.selection.range().and_then(|range| {
            let row = if forward { range.end } else { range.start };
            self.hunks.iter().position(|span| span.contains(row))
        });

        let candidates: Vec<usize> = match (current, forward) {
            (Some(i), true) => (i + 1..self.hunks.len()).collect(),
            (Some(i), false) => (0..i).rev().collect(),
            (None, _) => (0..self.hunks.len()).collect(),
        };

        match candidates.into_iter().find(|&i| self.hunks[i].body().is_some()) {
            Some(target) => self.land_on_hunk(target),
            None => debug!("No hunk to move to (forward: {})", forward),
        }
    }

    /// Select the first or last change line (line mode) or hunk.
    fn select_edge(&mut self, first: bool) {
        match self.mode() {
            SelectionMode::Line => {
                let target = if first {
                    self.find_row(0..self.line_count(), RowKind::is_change)
                } else {
                    self.find_row((0..self.line_count()).rev(), RowKind::is_change)
                };
                if let Some(row) = target {
                    self.selection.select_line(row);
                }
            }
            SelectionMode::HunkOrRange => {
                let mut indices = 0..self.hunks.len();
                let with_body = |i: &usize| self.hunks[*i].body().is_some();
                let target = if first {
                    indices.find(with_body)
                } else {
                    indices.rev().find(with_body)
                };
                if let Some(i) = target {
                    self.land_on_hunk(i);
                }
            }
        }
    }

    /// Grow the selection by one body row, switching to hunk/range mode.
    fn extend(&mut self, down: bool) {
        let Some(range) = self.selection.range() else {
            return;
        };

        let extended = if down {
            self.find_row(range.end + 1..self.line_count(), RowKind::is_selectable)
                .map(|end| SelectionRange::new(range.start, end))
        } else {
            self.find_row((0..range.start).rev(), RowKind::is_selectable)
                .map(|start| SelectionRange::new(start, range.end))
        };

        self.selection.select_range(extended.unwrap_or(range));
    }

    /// In line mode, select the surrounding hunk. In hunk/range mode, go back
    /// to line mode on the first change line of the range.
    fn toggle_select_mode(&mut self) {
        let Some(range) = self.selection.range() else {
            self.selection.set_hunk_or_range_mode();
            return;
        };

        match self.mode() {
            SelectionMode::Line => {
                self.selection.set_hunk_or_range_mode();
                if let Some(i) = self.hunks.iter().position(|span| span.contains(range.start)) {
                    self.land_on_hunk(i);
                }
            }
            SelectionMode::HunkOrRange => {
                let row = self
                    .find_row(range.start..=range.end, RowKind::is_change)
                    .unwrap_or(range.start);
                self.selection.set_line_select_mode();
                self.selection.select_line(row);
            }
        }
    }

    fn land_on_hunk(&mut self, hunk_index: usize) {
        let span = self.hunks[hunk_index];
        let Some(body) = span.body() else {
            return;
        };

        match self.mode() {
            SelectionMode::Line => {
                let row = self
                    .find_row(body.clone(), RowKind::is_change)
                    .unwrap_or(*body.start());
                self.selection.select_line(row);
            }
            SelectionMode::HunkOrRange => {
                self.selection
                    .select_range(SelectionRange::new(*body.start(), *body.end()));
            }
        }
    }

    /// First row yielded by `rows` whose kind matches `pred`.
    fn find_row(
        &self,
        mut rows: impl Iterator<Item = usize>,
        pred: impl Fn(&RowKind) -> bool,
    ) -> Option<usize> {
        rows.find(|&row| self.row_kinds.get(row).is_some_and(|kind| pred(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hunk, PatchLine};
    use pretty_assertions::assert_eq;

    /// Rows: 0-1 header, 2 hunk header, 3 ctx, 4 add, 5 del, 6 ctx,
    /// 7 hunk header, 8 ctx, 9 add.
    fn sample_patch() -> Patch {
        Patch::new(
            vec!["diff --git a/src/main.rs b/src/main.rs".into(), "+++ b/src/main.rs".into()],
            vec![
                Hunk::new(
                    "@@ -1,3 +1,3 @@",
                    " fn main()",
                    vec![
                        PatchLine::context(" fn main() {"),
                        PatchLine::addition("+    new_line();"),
                        PatchLine::deletion("-    old_line();"),
                        PatchLine::context(" }"),
                    ],
                ),
                Hunk::new(
                    "@@ -10,1 +10,2 @@",
                    "",
                    vec![PatchLine::context(" a"), PatchLine::addition("+b")],
                ),
            ],
        )
    }

    fn range(state: &PatchState) -> (usize, usize) {
        state.selected_view_range()
    }

    #[test]
    fn test_new_state_selects_first_change() {
        let state = PatchState::new(sample_patch());
        assert_eq!(state.line_count(), 10);
        assert!(state.selecting_line());
        assert_eq!(state.selected_range(), Some(SelectionRange::single(4)));
    }

    #[test]
    fn test_new_state_without_changes() {
        let patch = Patch::new(
            vec![],
            vec![Hunk::new("@@ -1 +1 @@", "", vec![PatchLine::context(" a")])],
        );
        let state = PatchState::new(patch);
        assert_eq!(state.selected_range(), None);
        assert_eq!(state.selected_view_range(), (0, 0));
        assert_eq!(state.selected_plain_patch(), "");
    }

    #[test]
    fn test_select_line_validates() {
        let mut state = PatchState::new(sample_patch());

        assert_eq!(state.select_line(6), Ok(()));
        assert_eq!(range(&state), (6, 6));

        assert_eq!(state.select_line(0), Err(SelectionError::NotSelectable(0)));
        assert_eq!(state.select_line(7), Err(SelectionError::NotSelectable(7)));
        assert_eq!(
            state.select_line(10),
            Err(SelectionError::OutOfRange { row: 10, total: 10 })
        );
        // Rejected requests leave the selection alone.
        assert_eq!(range(&state), (6, 6));
    }

    #[test]
    fn test_select_range_validates() {
        let mut state = PatchState::new(sample_patch());

        assert_eq!(state.select_range(4, 8), Ok(()));
        assert_eq!(state.mode(), SelectionMode::HunkOrRange);
        assert_eq!(range(&state), (4, 8));

        assert_eq!(
            state.select_range(6, 4),
            Err(SelectionError::InvertedRange { start: 6, end: 4 })
        );
        assert_eq!(state.select_range(2, 4), Err(SelectionError::NotSelectable(2)));
        assert_eq!(range(&state), (4, 8));
    }

    #[test]
    fn test_line_mode_does_not_move_selection() {
        let mut state = PatchState::new(sample_patch());
        state.select_range(3, 6).unwrap();
        state.set_line_select_mode();
        assert!(state.selecting_line());
        assert_eq!(range(&state), (3, 6));
    }

    #[test]
    fn test_select_hunk() {
        let mut state = PatchState::new(sample_patch());
        assert_eq!(state.select_hunk(1), Ok(()));
        assert_eq!(state.mode(), SelectionMode::HunkOrRange);
        assert_eq!(range(&state), (8, 9));
        assert_eq!(state.select_hunk(2), Err(SelectionError::NoSuchHunk(2)));
    }

    #[test]
    fn test_line_navigation_skips_context() {
        let mut state = PatchState::new(sample_patch());

        state.handle_action(ExplorerAction::SelectNext).unwrap();
        assert_eq!(range(&state), (5, 5));
        state.handle_action(ExplorerAction::SelectNext).unwrap();
        assert_eq!(range(&state), (9, 9));
        // Stays on the last change line.
        state.handle_action(ExplorerAction::SelectNext).unwrap();
        assert_eq!(range(&state), (9, 9));

        state.handle_action(ExplorerAction::SelectPrev).unwrap();
        assert_eq!(range(&state), (5, 5));
        state.handle_action(ExplorerAction::SelectFirst).unwrap();
        assert_eq!(range(&state), (4, 4));
        state.handle_action(ExplorerAction::SelectLast).unwrap();
        assert_eq!(range(&state), (9, 9));
    }

    #[test]
    fn test_hunk_navigation() {
        let mut state = PatchState::new(sample_patch());

        // Line mode lands on the hunk's first change line.
        state.handle_action(ExplorerAction::NextHunk).unwrap();
        assert!(state.selecting_line());
        assert_eq!(range(&state), (9, 9));

        state.set_hunk_or_range_mode();
        state.handle_action(ExplorerAction::SelectPrev).unwrap();
        assert_eq!(range(&state), (3, 6));
        state.handle_action(ExplorerAction::SelectNext).unwrap();
        assert_eq!(range(&state), (8, 9));
        state.handle_action(ExplorerAction::NextHunk).unwrap();
        assert_eq!(range(&state), (8, 9));

        state.handle_action(ExplorerAction::SelectFirst).unwrap();
        assert_eq!(range(&state), (3, 6));
        state.handle_action(ExplorerAction::SelectLast).unwrap();
        assert_eq!(range(&state), (8, 9));
    }

    #[test]
    fn test_extend_range() {
        let mut state = PatchState::new(sample_patch());

        state.handle_action(ExplorerAction::ExtendDown).unwrap();
        assert_eq!(state.mode(), SelectionMode::HunkOrRange);
        assert_eq!(range(&state), (4, 5));

        state.handle_action(ExplorerAction::ExtendDown).unwrap();
        state.handle_action(ExplorerAction::ExtendDown).unwrap();
        // The hunk header at row 7 is skipped over.
        assert_eq!(range(&state), (4, 8));

        state.handle_action(ExplorerAction::ExtendUp).unwrap();
        assert_eq!(range(&state), (3, 8));
        state.handle_action(ExplorerAction::ExtendUp).unwrap();
        assert_eq!(range(&state), (3, 8));
    }

    #[test]
    fn test_toggle_select_mode() {
        let mut state = PatchState::new(sample_patch());

        state.handle_action(ExplorerAction::ToggleSelectMode).unwrap();
        assert_eq!(state.mode(), SelectionMode::HunkOrRange);
        assert_eq!(range(&state), (3, 6));

        state.handle_action(ExplorerAction::ToggleSelectMode).unwrap();
        assert!(state.selecting_line());
        assert_eq!(range(&state), (4, 4));
    }

    #[test]
    fn test_actions_report_invalid_rows() {
        let mut state = PatchState::new(sample_patch());
        assert_eq!(
            state.handle_action(ExplorerAction::SelectLine(2)),
            Err(SelectionError::NotSelectable(2))
        );
        assert_eq!(
            state.handle_action(ExplorerAction::SelectRange { start: 3, end: 99 }),
            Err(SelectionError::OutOfRange { row: 99, total: 10 })
        );

        state.handle_action(ExplorerAction::SetViewWidth(120)).unwrap();
        assert_eq!(state.view_width(), 120);
    }

    #[test]
    fn test_calculate_origin_uses_selection() {
        let mut state = PatchState::new(sample_patch());
        state.select_line(9).unwrap();
        assert_eq!(state.calculate_origin(0, 4, 10), 6);
        assert_eq!(state.calculate_origin(6, 4, 10), 6);
    }

    #[test]
    fn test_render_options() {
        let mut state = PatchState::new(sample_patch());
        state.select_range(4, 5).unwrap();
        state.on_view_width_changed(80);

        let opts = state.render_options(&[4, 9], true);
        assert_eq!(opts.selection, Some(SelectionRange::new(4, 5)));
        assert_eq!(opts.mode, SelectionMode::HunkOrRange);
        assert_eq!(opts.view_width, 80);
        assert!(opts.included.contains(&9));

        let unfocused = state.render_options(&[], false);
        assert_eq!(unfocused.selection, None);
    }

    #[test]
    fn test_selected_plain_patch() {
        let mut state = PatchState::new(sample_patch());
        state.select_range(4, 5).unwrap();
        assert_eq!(
            state.selected_plain_patch(),
            "+    new_line();\n-    old_line();\n"
        );
    }
}
