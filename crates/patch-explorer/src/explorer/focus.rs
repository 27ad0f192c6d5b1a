//! Focus tracking for the explorer view.

use crate::state::PatchState;

/// Whether the explorer's view currently holds focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: bool,
}

impl FocusState {
    /// Whether the view has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The view gained focus.
    pub fn gain(&mut self) {
        self.focused = true;
    }

    /// The view lost focus.
    pub fn lose(&mut self) {
        self.focused = false;
    }

    /// Whether the host should draw its full-row highlight.
    ///
    /// Only line mode uses it; hunk/range mode marks rows with the margin
    /// indicator instead.
    pub fn wants_highlight(&self, state: Option<&PatchState>) -> bool {
        self.focused && state.is_some_and(PatchState::selecting_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hunk, Patch, PatchLine};

    fn state() -> PatchState {
        PatchState::new(Patch::new(
            vec![],
            vec![Hunk::new(
                "@@ -1 +1 @@",
                "",
                vec![PatchLine::addition("+a"), PatchLine::addition("+b")],
            )],
        ))
    }

    #[test]
    fn test_highlight_requires_focus_and_line_mode() {
        let mut focus = FocusState::default();
        let mut state = state();

        assert!(!focus.wants_highlight(Some(&state)));

        focus.gain();
        assert!(focus.is_focused());
        assert!(focus.wants_highlight(Some(&state)));
        assert!(!focus.wants_highlight(None));

        state.set_hunk_or_range_mode();
        assert!(!focus.wants_highlight(Some(&state)));

        state.set_line_select_mode();
        focus.lose();
        assert!(!focus.wants_highlight(Some(&state)));
    }
}
