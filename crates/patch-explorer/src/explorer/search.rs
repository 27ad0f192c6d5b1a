//! Navigation triggered by search results.

use crate::state::{PatchState, SelectionError};

/// Jump to a search result.
///
/// Search results are always single-line jumps, so the selection switches to
/// line mode. The row is checked first; a rejected jump changes nothing.
pub fn navigate_to(state: &mut PatchState, row: usize) -> Result<(), SelectionError> {
    state.select_line(row)?;
    state.set_line_select_mode();
    Ok(())
}
