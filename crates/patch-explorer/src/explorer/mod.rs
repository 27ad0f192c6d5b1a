//! The patch explorer: selection state, rendering and a host view behind one
//! lock.
//!
//! Keyboard handlers, search and resize events may arrive from different
//! threads. Each entry point takes the lock, updates the state and pushes the
//! result to the view before releasing it, so a render never observes a
//! half-applied selection change.

mod driver;
mod focus;
mod search;

pub use focus::FocusState;
pub use search::navigate_to;

use crate::action::ExplorerAction;
use crate::highlight::HighlightAssets;
use crate::model::Patch;
use crate::state::{PatchState, SelectionError};
use crate::traits::HostView;
use driver::Session;
use log::{debug, trace};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Supplies the rows currently included in a custom patch being built.
pub type IncludedLines = Box<dyn Fn() -> Vec<usize> + Send + Sync>;

/// An interactive explorer over one patch, driving a [`HostView`].
pub struct PatchExplorer<V> {
    session: Mutex<Session<V>>,
    included_lines: IncludedLines,
    assets: Arc<HighlightAssets>,
}

impl<V: HostView> PatchExplorer<V> {
    /// Create an explorer with no patch loaded.
    pub fn new(
        view: V,
        assets: Arc<HighlightAssets>,
        included_lines: impl Fn() -> Vec<usize> + Send + Sync + 'static,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new(view)),
            included_lines: Box::new(included_lines),
            assets,
        }
    }

    /// Lock the session.
    ///
    /// A panic in another holder leaves the state consistent (every mutation
    /// is validated before it is applied), so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, Session<V>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render_and_focus_locked(&self, session: &mut Session<V>) {
        let included = (self.included_lines)();
        session.render_and_focus(&included, &self.assets);
    }

    /// Replace the explored patch and show it.
    pub fn load_patch(&self, patch: impl Into<Arc<Patch>>) {
        let mut session = self.lock();
        let width = session.view.inner_width();

        let mut state = PatchState::new(patch);
        state.on_view_width_changed(width);
        debug!("Loaded patch with {} rows", state.line_count());

        session.state = Some(state);
        self.render_and_focus_locked(&mut session);
    }

    /// Drop the current patch and clear the view.
    pub fn clear(&self) {
        let mut session = self.lock();
        session.state = None;
        let included = (self.included_lines)();
        session.render(&included, &self.assets);
    }

    /// The view gained focus: show the selection.
    pub fn handle_focus(&self) {
        let mut session = self.lock();
        session.focus.gain();
        self.render_and_focus_locked(&mut session);
    }

    /// The view lost focus: hide the selection and the row highlight.
    pub fn handle_focus_lost(&self) {
        let mut session = self.lock();
        session.focus.lose();
        let included = (self.included_lines)();
        session.render(&included, &self.assets);
    }

    /// Apply an action, then re-render and scroll to the selection.
    ///
    /// A rejected action leaves both the state and the view untouched.
    pub fn handle_action(&self, action: ExplorerAction) -> Result<(), SelectionError> {
        let mut session = self.lock();
        let state = session.state.as_mut().ok_or(SelectionError::NoPatch)?;

        if action.is_navigation() {
            trace!("Navigation action: {:?}", action);
        } else {
            debug!("Explorer action: {:?}", action);
        }

        if let Err(err) = state.handle_action(action) {
            debug!("Rejected {:?}: {}", action, err);
            return Err(err);
        }

        self.render_and_focus_locked(&mut session);
        Ok(())
    }

    /// Jump to a search result in line mode.
    pub fn navigate_to(&self, row: usize) -> Result<(), SelectionError> {
        let mut session = self.lock();
        let state = session.state.as_mut().ok_or(SelectionError::NoPatch)?;
        navigate_to(state, row)?;
        self.render_and_focus_locked(&mut session);
        Ok(())
    }

    /// Pick up the view's new width, then re-render.
    pub fn on_view_width_changed(&self) {
        let mut session = self.lock();
        let width = session.view.inner_width();
        let Some(state) = session.state.as_mut() else {
            return;
        };
        state.on_view_width_changed(width);
        self.render_and_focus_locked(&mut session);
    }

    /// Re-render without moving the viewport.
    pub fn render(&self) {
        let mut session = self.lock();
        let included = (self.included_lines)();
        session.render(&included, &self.assets);
    }

    /// Re-render and scroll to the selection.
    pub fn render_and_focus(&self) {
        let mut session = self.lock();
        self.render_and_focus_locked(&mut session);
    }

    /// The styled content for the current state, without touching the
    /// view's content.
    pub fn content_to_render(&self) -> String {
        let mut session = self.lock();
        let included = (self.included_lines)();
        session.content_to_render(&included, &self.assets)
    }

    /// The selected rows as a plain patch fragment, if a patch is loaded.
    pub fn selected_plain_patch(&self) -> Option<String> {
        self.lock().state.as_ref().map(PatchState::selected_plain_patch)
    }

    /// Whether the view has focus.
    pub fn is_focused(&self) -> bool {
        self.lock().focus.is_focused()
    }

    /// Inspect the state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(Option<&PatchState>) -> R) -> R {
        f(self.lock().state.as_ref())
    }

    /// Inspect the view under the lock.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock().view)
    }
}

impl<V> std::fmt::Debug for PatchExplorer<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchExplorer")
            .field("assets", &self.assets)
            .finish_non_exhaustive()
    }
}
