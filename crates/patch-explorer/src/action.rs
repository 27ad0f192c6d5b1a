//! Patch Explorer Actions
//!
//! Tagged actions that the explorer can process. These are exposed by the crate
//! so that the orchestrating application can transform key events into actions
//! and dispatch them to the explorer.

/// Actions that can be performed on a patch explorer.
///
/// These are the semantic actions the explorer understands. The orchestrating
/// application is responsible for mapping key events to these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerAction {
    // === Navigation ===
    /// Next change line (line mode) or next hunk (hunk/range mode)
    SelectNext,
    /// Previous change line (line mode) or previous hunk (hunk/range mode)
    SelectPrev,
    /// Jump to the next hunk
    NextHunk,
    /// Jump to the previous hunk
    PrevHunk,
    /// First change line or hunk
    SelectFirst,
    /// Last change line or hunk
    SelectLast,
    /// Select a specific row
    SelectLine(usize),

    // === Range selection ===
    /// Grow the selection by one body row downwards
    ExtendDown,
    /// Grow the selection by one body row upwards
    ExtendUp,
    /// Select an explicit row range
    SelectRange { start: usize, end: usize },
    /// Switch between line mode and hunk/range mode
    ToggleSelectMode,

    // === Viewport ===
    /// The host view's width changed
    SetViewWidth(usize),
}

impl ExplorerAction {
    /// Check if this action is a navigation action
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            ExplorerAction::SelectNext
                | ExplorerAction::SelectPrev
                | ExplorerAction::NextHunk
                | ExplorerAction::PrevHunk
                | ExplorerAction::SelectFirst
                | ExplorerAction::SelectLast
                | ExplorerAction::SelectLine(_)
        )
    }
}
