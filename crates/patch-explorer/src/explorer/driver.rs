//! Render driver: turns the session's state into view content and geometry.

use super::focus::FocusState;
use crate::highlight::HighlightAssets;
use crate::render::format_view;
use crate::state::PatchState;
use crate::traits::HostView;

/// Everything guarded by an explorer's lock.
#[derive(Debug)]
pub(super) struct Session<V> {
    pub(super) view: V,
    pub(super) state: Option<PatchState>,
    pub(super) focus: FocusState,
}

impl<V: HostView> Session<V> {
    pub(super) fn new(view: V) -> Self {
        Self {
            view,
            state: None,
            focus: FocusState::default(),
        }
    }

    /// Render the current state.
    ///
    /// Also syncs the host's full-row highlight with the selection mode. The
    /// selection is only shown while focused.
    pub(super) fn content_to_render(&mut self, included: &[usize], assets: &HighlightAssets) -> String {
        let highlight = self.focus.wants_highlight(self.state.as_ref());
        self.view.set_highlight(highlight);

        let Some(state) = &self.state else {
            return String::new();
        };

        let opts = state.render_options(included, self.focus.is_focused());
        format_view(state.patch(), &opts, assets)
    }

    pub(super) fn render(&mut self, included: &[usize], assets: &HighlightAssets) {
        self.set_content(included, assets);
        self.view.request_redraw();
    }

    pub(super) fn render_and_focus(&mut self, included: &[usize], assets: &HighlightAssets) {
        self.set_content(included, assets);
        self.focus_selection();
        self.view.request_redraw();
    }

    /// Scroll the view so the selection is visible and place the cursor.
    ///
    /// As far as the view is concerned the selection is always a range: its
    /// start is the range-select start and its end carries the cursor.
    pub(super) fn focus_selection(&mut self) {
        let Some(state) = &self.state else {
            return;
        };

        let buffer_height = self.view.inner_height();
        let origin = self.view.origin_y();
        let total_lines = self.view.view_lines_height();

        let new_origin = state.calculate_origin(origin, buffer_height, total_lines);
        self.view.set_origin_y(new_origin);

        let (start, end) = state.selected_view_range();
        self.view.set_range_select_start(start);
        self.view.set_cursor_y(end.saturating_sub(new_origin));
    }

    fn set_content(&mut self, included: &[usize], assets: &HighlightAssets) {
        let content = self.content_to_render(included, assets);
        self.view.set_content(content);
    }
}
